use crate::ast;
use crate::model::Fragment;
use crate::transform::collect_fragment_dependencies;
use crate::transform::transform_selection_set;
use crate::TransformError;

type Result<T> = std::result::Result<T, TransformError>;

pub fn transform_fragment(
    ast: &ast::operation::FragmentDefinition,
) -> Result<Fragment> {
    let ast::operation::TypeCondition::On(type_condition) = &ast.type_condition;
    let fields = transform_selection_set(&ast.selection_set)?;
    let fragment_dependencies = collect_fragment_dependencies(&fields);

    Ok(Fragment {
        name: ast.name.to_owned(),
        source_type: type_condition.to_owned(),
        fields,
        fragment_dependencies,
    })
}
