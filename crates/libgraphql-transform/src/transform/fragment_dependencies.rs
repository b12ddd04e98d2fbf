use crate::model::Field;

/// Collect the name of every fragment spread found anywhere in `fields`.
///
/// Inline fragments are not dependencies themselves, but their sub-fields are
/// searched like any other field's. Names are neither deduplicated nor checked
/// for cycles. Returns `None` rather than an empty list when nothing is
/// spread.
pub fn collect_fragment_dependencies(fields: &[Field]) -> Option<Vec<String>> {
    let fragment_names = fragment_spread_names(fields);
    if fragment_names.is_empty() {
        None
    } else {
        Some(fragment_names)
    }
}

fn fragment_spread_names(fields: &[Field]) -> Vec<String> {
    fields.iter()
        .flat_map(|field| {
            let own_name = field.is_fragment_spread().then(|| field.name.to_owned());
            let nested_names = field.sub_fields()
                .map(fragment_spread_names)
                .unwrap_or_default();
            own_name.into_iter().chain(nested_names)
        })
        .collect()
}
