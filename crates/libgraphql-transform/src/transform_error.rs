use crate::ast;
use crate::file_reader::ReadContentError;
use std::sync::Arc;
use thiserror::Error;

/// Everything that can abort the transformation of a GraphQL document.
///
/// None of these are recoverable: the document (and, for a multi-document
/// [`TemplateDataBuilder`](crate::TemplateDataBuilder), the whole build)
/// is abandoned.
#[derive(Clone, Debug, Error)]
pub enum TransformError {
    #[error("Failure while trying to read a GraphQL document from disk: {0}")]
    DocumentFileReadError(Arc<ReadContentError>),

    #[error("Invalid value of kind `{kind}`: {value}")]
    InvalidValue {
        kind: &'static str,
        value: String,
    },

    #[error("Error parsing GraphQL document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),

    #[error("Unknown definition kind: `{kind}`")]
    UnknownDefinitionKind {
        kind: String,
    },

    #[error("Unknown operation kind: `{kind}`")]
    UnknownOperationKind {
        kind: String,
    },
}
impl std::convert::From<ast::operation::ParseError> for TransformError {
    fn from(value: ast::operation::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
impl std::convert::From<ReadContentError> for TransformError {
    fn from(value: ReadContentError) -> Self {
        Self::DocumentFileReadError(Arc::new(value))
    }
}
