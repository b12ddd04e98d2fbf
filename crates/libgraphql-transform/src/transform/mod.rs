//! Converts the `graphql_parser` AST of an executable document into the
//! [`model`](crate::model) types.
//!
//! Every AST category (values, selections, types, definitions) is a closed
//! enum in `graphql_parser` and is matched exhaustively here, so a new kind of
//! node is a compile error rather than a silent fallthrough.

mod fragment_dependencies;
mod fragment_transformer;
mod operation_transformer;
mod selection_transformer;
mod template_data_builder;
mod type_serializer;
mod value_serializer;

pub use fragment_dependencies::collect_fragment_dependencies;
pub use fragment_transformer::transform_fragment;
pub use operation_transformer::transform_operation;
pub use selection_transformer::transform_selection_set;
pub use template_data_builder::TemplateDataBuilder;
pub use template_data_builder::transform_document;
pub use type_serializer::serialize_type;
pub use value_serializer::serialize_value;

#[cfg(test)]
mod tests;
