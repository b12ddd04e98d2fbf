//! Transforms GraphQL executable documents (queries, mutations, and
//! fragments) into a flat, serializable [`TemplateData`] model that is
//! intended to drive arbitrary text templates for code generation.
//!
//! ```
//! use libgraphql_transform::TemplateData;
//!
//! let data: TemplateData = r#"
//!     fragment UserFields on User { id name }
//!     query GetUser($id: ID!) { user(id: $id) { ...UserFields } }
//! "#.parse().unwrap();
//!
//! assert_eq!(data.fragments()[0].name(), "UserFields");
//! assert_eq!(data.queries()[0].variables()[0].type_annotation(), "ID!");
//! ```

pub mod ast;
pub mod casing;
pub mod file_reader;
pub mod model;
pub mod transform;
mod transform_error;

pub use model::TemplateData;
pub use transform::TemplateDataBuilder;
pub use transform_error::TransformError;

#[cfg(test)]
mod tests;
