//! The data model handed to templates.
//!
//! Every type here serializes with camelCase field names (`isSpread`,
//! `sourceType`, `subFields`, `fragmentDependencies`, ...). Templates refer to
//! these names directly, so they must stay stable.

mod field;
mod field_argument;
mod fragment;
mod operation;
mod operation_kind;
mod template_data;
mod variable;

pub use field::Field;
pub use field_argument::FieldArgument;
pub use fragment::Fragment;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use template_data::TemplateData;
pub use variable::Variable;
