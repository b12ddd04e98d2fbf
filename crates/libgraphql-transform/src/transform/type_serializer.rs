use crate::ast;

/// Render a type reference back into GraphQL syntax, e.g. `[[ID!]!]`.
pub fn serialize_type(ast_type: &ast::operation::Type) -> String {
    match ast_type {
        ast::operation::Type::NamedType(name) => name.to_owned(),
        ast::operation::Type::ListType(inner) => format!("[{}]", serialize_type(inner)),
        ast::operation::Type::NonNullType(inner) => format!("{}!", serialize_type(inner)),
    }
}
