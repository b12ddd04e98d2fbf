use crate::model::Field;
use crate::transform::collect_fragment_dependencies;

#[test]
fn no_spreads_is_absent() {
    let fields = vec![
        Field::field("id", None, None),
        Field::inline_fragment("User", vec![Field::field("email", None, None)]),
    ];

    assert_eq!(collect_fragment_dependencies(&fields), None);
    assert_eq!(collect_fragment_dependencies(&[]), None);
}

#[test]
fn collects_nested_spreads_in_order_with_duplicates() {
    let fields = vec![
        Field::fragment_spread("A"),
        Field::field("friends", None, Some(vec![
            Field::fragment_spread("B"),
            Field::field("best", None, Some(vec![Field::fragment_spread("A")])),
        ])),
        Field::inline_fragment("User", vec![
            Field::fragment_spread("C"),
            Field::inline_fragment("Admin", vec![Field::fragment_spread("B")]),
        ]),
    ];

    assert_eq!(
        collect_fragment_dependencies(&fields),
        Some(vec![
            "A".to_string(),
            "B".to_string(),
            "A".to_string(),
            "C".to_string(),
            "B".to_string(),
        ]),
    );
}
