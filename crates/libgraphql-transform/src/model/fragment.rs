use crate::model::Field;

/// A named fragment definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub(crate) name: String,
    pub(crate) source_type: String,
    pub(crate) fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fragment_dependencies: Option<Vec<String>>,
}
impl Fragment {
    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    /// Names of every fragment spread anywhere within this fragment's fields
    /// (including inside inline fragments), in document order and without
    /// deduplication. `None` when the fragment spreads no other fragments.
    ///
    /// NOTE: These are names only. Nothing guarantees the named fragments are
    /// defined anywhere.
    pub fn fragment_dependencies(&self) -> Option<&[String]> {
        self.fragment_dependencies.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Counts repeated spreads of the same fragment once per occurrence.
    pub fn num_fragment_dependencies(&self) -> usize {
        self.fragment_dependencies.as_ref().map_or(0, Vec::len)
    }

    /// The type condition this fragment is defined on.
    pub fn source_type(&self) -> &str {
        self.source_type.as_str()
    }
}
