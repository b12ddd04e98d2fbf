use crate::transform::serialize_type;
use crate::transform::tests::utils::variable_type;

#[test]
fn wrappers_nest_in_source_order() {
    for type_src in [
        "String",
        "String!",
        "[Int]",
        "[Int]!",
        "[ID!]!",
        "[[ID!]!]",
        "[[[Boolean]!]]!",
    ] {
        assert_eq!(serialize_type(&variable_type(type_src)), type_src);
    }
}
