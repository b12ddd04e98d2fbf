use crate::model::FieldArgument;

/// One entry in a selection set.
///
/// A single type represents all three kinds of selection:
///
/// * A plain field has `is_spread == false` and the field's `name`.
/// * A fragment spread (`...UserFields`) has `is_spread == true`, the spread
///   fragment's `name` and no `sub_fields`.
/// * An inline fragment (`... on User { email }`) has `is_spread == true`, an
///   empty `name`, its type condition as `source_type` and its own selection
///   set as `sub_fields`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub(crate) is_spread: bool,
    pub(crate) name: String,
    pub(crate) source_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) arguments: Option<Vec<FieldArgument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sub_fields: Option<Vec<Field>>,
}
impl Field {
    /// A plain field selection.
    pub fn field(
        name: impl Into<String>,
        arguments: Option<Vec<FieldArgument>>,
        sub_fields: Option<Vec<Field>>,
    ) -> Self {
        Self {
            is_spread: false,
            name: name.into(),
            source_type: String::new(),
            arguments,
            sub_fields,
        }
    }

    /// A named fragment spread.
    pub fn fragment_spread(fragment_name: impl Into<String>) -> Self {
        Self {
            is_spread: true,
            name: fragment_name.into(),
            source_type: String::new(),
            arguments: None,
            sub_fields: None,
        }
    }

    /// An inline fragment. `source_type` is empty when the inline fragment
    /// has no type condition.
    pub fn inline_fragment(
        source_type: impl Into<String>,
        sub_fields: Vec<Field>,
    ) -> Self {
        Self {
            is_spread: true,
            name: String::new(),
            source_type: source_type.into(),
            arguments: None,
            sub_fields: Some(sub_fields),
        }
    }

    /// `None` when no arguments were passed.
    pub fn arguments(&self) -> Option<&[FieldArgument]> {
        self.arguments.as_deref()
    }

    pub fn is_fragment_spread(&self) -> bool {
        self.is_spread && !self.name.is_empty()
    }

    pub fn is_inline_fragment(&self) -> bool {
        self.is_spread && self.name.is_empty()
    }

    pub fn is_spread(&self) -> bool {
        self.is_spread
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn source_type(&self) -> &str {
        self.source_type.as_str()
    }

    /// `None` when this field has no selection set of its own.
    pub fn sub_fields(&self) -> Option<&[Field]> {
        self.sub_fields.as_deref()
    }
}
