use crate::model::Fragment;
use crate::model::Operation;
use crate::transform::TemplateDataBuilder;
use crate::TransformError;

/// Everything a template gets to see: all fragments, queries and mutations
/// defined across the documents of a build.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub(crate) fragments: Vec<Fragment>,
    pub(crate) queries: Vec<Operation>,
    pub(crate) mutations: Vec<Operation>,
}
impl TemplateData {
    /// Convenience wrapper around [`TemplateDataBuilder::new()`].
    pub fn builder() -> TemplateDataBuilder {
        TemplateDataBuilder::new()
    }

    /// Ordered by ascending number of fragment dependencies, then by the order
    /// in which the fragments were encountered.
    ///
    /// NOTE: This is a heuristic for templates that want to emit fragments
    /// with fewer dependencies first. It is not a topological sort: two
    /// fragments with the same number of dependencies keep their document
    /// order even if one spreads the other.
    pub fn fragments(&self) -> &[Fragment] {
        self.fragments.as_slice()
    }

    /// In the order they were encountered.
    pub fn mutations(&self) -> &[Operation] {
        self.mutations.as_slice()
    }

    /// In the order they were encountered. Includes anonymous
    /// `{ ... }` shorthand queries.
    pub fn queries(&self) -> &[Operation] {
        self.queries.as_slice()
    }
}
impl std::str::FromStr for TemplateData {
    type Err = TransformError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(TemplateDataBuilder::new().add_str(content)?.build())
    }
}
