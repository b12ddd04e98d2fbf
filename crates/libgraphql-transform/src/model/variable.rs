/// A variable declared by an [`Operation`](crate::model::Operation).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Variable {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) type_annotation: String,
}
impl Variable {
    /// The variable's name without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared type in GraphQL syntax, e.g. `String!` or `[[ID!]!]`.
    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }
}
