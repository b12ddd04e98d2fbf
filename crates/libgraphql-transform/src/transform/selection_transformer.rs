use crate::ast;
use crate::model::Field;
use crate::model::FieldArgument;
use crate::transform::serialize_value;
use crate::TransformError;

type Result<T> = std::result::Result<T, TransformError>;

/// Transform a selection set into [`Field`]s, one per selection and in the
/// same order.
pub fn transform_selection_set(
    selection_set: &ast::operation::SelectionSet,
) -> Result<Vec<Field>> {
    selection_set.items
        .iter()
        .map(transform_selection)
        .collect()
}

fn transform_selection(selection: &ast::operation::Selection) -> Result<Field> {
    use ast::operation::Selection as Sel;
    Ok(match selection {
        Sel::Field(field) => Field::field(
            field.name.to_owned(),
            transform_arguments(&field.arguments)?,
            // `graphql_parser` gives leaf fields an empty selection set.
            if field.selection_set.items.is_empty() {
                None
            } else {
                Some(transform_selection_set(&field.selection_set)?)
            },
        ),

        Sel::FragmentSpread(spread) =>
            Field::fragment_spread(spread.fragment_name.to_owned()),

        Sel::InlineFragment(inline_fragment) => {
            let source_type = match &inline_fragment.type_condition {
                Some(ast::operation::TypeCondition::On(type_name)) => type_name.to_owned(),
                None => String::new(),
            };
            Field::inline_fragment(
                source_type,
                transform_selection_set(&inline_fragment.selection_set)?,
            )
        },
    })
}

fn transform_arguments(
    arguments: &[(String, ast::Value)],
) -> Result<Option<Vec<FieldArgument>>> {
    if arguments.is_empty() {
        return Ok(None);
    }

    arguments.iter()
        .map(|(name, value)| Ok(FieldArgument::new(name, serialize_value(value)?)))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
