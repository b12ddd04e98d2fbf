/// The kinds of [`Operation`](crate::model::Operation) a
/// [`TemplateData`](crate::TemplateData) can hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
}
