/// An argument passed to a [`Field`](crate::model::Field).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldArgument {
    pub(crate) name: String,
    pub(crate) value: String,
}
impl FieldArgument {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The argument's value rendered back to GraphQL value syntax, e.g. `true`,
    /// `$id`, `[1, 2]` or `{key: val}`.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}
