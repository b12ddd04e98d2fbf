use crate::ast;

pub(super) fn parse_executable(src: &str) -> ast::operation::Document {
    ast::operation::parse(src)
        .unwrap_or_else(|err| panic!("Failed to parse test document: {err}"))
}

pub(super) fn first_operation(src: &str) -> ast::operation::OperationDefinition {
    match parse_executable(src).definitions.into_iter().next() {
        Some(ast::operation::Definition::Operation(op_def)) => op_def,
        other => panic!("Expected an operation definition, got: {other:?}"),
    }
}

pub(super) fn first_fragment(src: &str) -> ast::operation::FragmentDefinition {
    match parse_executable(src).definitions.into_iter().next() {
        Some(ast::operation::Definition::Fragment(frag_def)) => frag_def,
        other => panic!("Expected a fragment definition, got: {other:?}"),
    }
}

pub(super) fn selection_set_of(src: &str) -> ast::operation::SelectionSet {
    match first_operation(src) {
        ast::operation::OperationDefinition::SelectionSet(selection_set) => selection_set,
        ast::operation::OperationDefinition::Query(query) => query.selection_set,
        ast::operation::OperationDefinition::Mutation(mutation) => mutation.selection_set,
        ast::operation::OperationDefinition::Subscription(sub) => sub.selection_set,
    }
}

/// The value of the first argument of the first field in `{ field(arg: <value_src>) }`.
pub(super) fn argument_value(value_src: &str) -> ast::Value {
    let selection_set = selection_set_of(&format!("{{ field(arg: {value_src}) }}"));
    match selection_set.items.into_iter().next() {
        Some(ast::operation::Selection::Field(mut field)) => field.arguments.remove(0).1,
        other => panic!("Expected a field selection, got: {other:?}"),
    }
}

pub(super) fn variable_type(type_src: &str) -> ast::operation::Type {
    match first_operation(&format!("query Q($var: {type_src}) {{ field }}")) {
        ast::operation::OperationDefinition::Query(mut query) =>
            query.variable_definitions.remove(0).var_type,
        other => panic!("Expected a query, got: {other:?}"),
    }
}
