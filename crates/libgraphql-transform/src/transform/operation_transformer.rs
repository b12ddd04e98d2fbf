use crate::ast;
use crate::ast::operation::OperationDefinition;
use crate::model::Operation;
use crate::model::OperationKind;
use crate::model::Variable;
use crate::transform::serialize_type;
use crate::transform::transform_selection_set;
use crate::TransformError;

type Result<T> = std::result::Result<T, TransformError>;

struct LoadFromAstDetails<'ast> {
    name: Option<&'ast String>,
    op_kind: OperationKind,
    selection_set: &'ast ast::operation::SelectionSet,
    variables: &'ast [ast::operation::VariableDefinition],
}

/// Transform a query or mutation definition. The `{ ... }` shorthand is an
/// anonymous query. Subscriptions are rejected with
/// [`TransformError::UnknownOperationKind`].
pub fn transform_operation(
    ast: &OperationDefinition,
) -> Result<(OperationKind, Operation)> {
    let ast_details = match ast {
        OperationDefinition::SelectionSet(selection_set) => LoadFromAstDetails {
            name: None,
            op_kind: OperationKind::Query,
            selection_set,
            variables: &[],
        },

        OperationDefinition::Query(ast::operation::Query {
            name,
            selection_set,
            variable_definitions,
            ..
        }) => LoadFromAstDetails {
            name: name.as_ref(),
            op_kind: OperationKind::Query,
            selection_set,
            variables: variable_definitions,
        },

        OperationDefinition::Mutation(ast::operation::Mutation {
            name,
            selection_set,
            variable_definitions,
            ..
        }) => LoadFromAstDetails {
            name: name.as_ref(),
            op_kind: OperationKind::Mutation,
            selection_set,
            variables: variable_definitions,
        },

        OperationDefinition::Subscription(_) =>
            return Err(TransformError::UnknownOperationKind {
                kind: "subscription".to_string(),
            }),
    };

    let variables = ast_details.variables
        .iter()
        .map(|var_def| Variable {
            name: var_def.name.to_owned(),
            type_annotation: serialize_type(&var_def.var_type),
        })
        .collect();

    let operation = Operation {
        name: ast_details.name.cloned().unwrap_or_default(),
        variables,
        fields: transform_selection_set(ast_details.selection_set)?,
    };

    Ok((ast_details.op_kind, operation))
}
