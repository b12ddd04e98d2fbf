use crate::model::Field;
use crate::model::Variable;

/// A query or mutation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub(crate) name: String,
    pub(crate) variables: Vec<Variable>,
    pub(crate) fields: Vec<Field>,
}
impl Operation {
    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Empty for anonymous operations.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn variables(&self) -> &[Variable] {
        self.variables.as_slice()
    }
}
