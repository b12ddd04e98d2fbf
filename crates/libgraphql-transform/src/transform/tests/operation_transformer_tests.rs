use crate::model::Field;
use crate::model::FieldArgument;
use crate::model::OperationKind;
use crate::transform::tests::utils::first_fragment;
use crate::transform::tests::utils::first_operation;
use crate::transform::transform_fragment;
use crate::transform::transform_operation;
use crate::TransformError;

#[test]
fn named_query_with_variables() {
    let (kind, operation) = transform_operation(&first_operation(r#"
        query GetUsers($ids: [ID!]!, $limit: Int, $filter: UserFilter!) {
            users(ids: $ids, limit: $limit) { id }
        }
    "#)).unwrap();

    assert_eq!(kind, OperationKind::Query);
    assert_eq!(operation.name(), "GetUsers");
    assert!(!operation.is_anonymous());

    let variables: Vec<(&str, &str)> = operation.variables()
        .iter()
        .map(|var| (var.name(), var.type_annotation()))
        .collect();
    assert_eq!(variables, vec![
        ("ids", "[ID!]!"),
        ("limit", "Int"),
        ("filter", "UserFilter!"),
    ]);

    assert_eq!(operation.fields(), &[
        Field::field(
            "users",
            Some(vec![
                FieldArgument::new("ids", "$ids"),
                FieldArgument::new("limit", "$limit"),
            ]),
            Some(vec![Field::field("id", None, None)]),
        ),
    ]);
}

#[test]
fn mutation_is_classified_as_mutation() {
    let (kind, operation) = transform_operation(&first_operation(
        r#"mutation CreateUser { createUser(name: "Alice") { id } }"#,
    )).unwrap();

    assert_eq!(kind, OperationKind::Mutation);
    assert_eq!(operation.name(), "CreateUser");
    assert!(operation.variables().is_empty());
    assert_eq!(
        operation.fields()[0].arguments().unwrap(),
        &[FieldArgument::new("name", "Alice")],
    );
}

#[test]
fn anonymous_operations_have_empty_names() {
    let (kind, shorthand) = transform_operation(&first_operation("{ me { id } }")).unwrap();
    assert_eq!(kind, OperationKind::Query);
    assert!(shorthand.is_anonymous());
    assert!(shorthand.variables().is_empty());

    let (kind, unnamed) = transform_operation(&first_operation(
        "query ($id: ID) { node(id: $id) { id } }",
    )).unwrap();
    assert_eq!(kind, OperationKind::Query);
    assert_eq!(unnamed.name(), "");
    assert_eq!(unnamed.variables()[0].type_annotation(), "ID");
}

#[test]
fn subscription_is_an_unknown_operation_kind() {
    let result = transform_operation(&first_operation(
        "subscription OnUser { userCreated { id } }",
    ));

    assert!(
        matches!(
            &result,
            Err(TransformError::UnknownOperationKind { kind }) if kind == "subscription",
        ),
        "unexpected result: {result:?}",
    );
}

#[test]
fn fragment_with_dependencies() {
    let fragment = transform_fragment(&first_fragment(r#"
        fragment PostFields on Post {
            id
            author { ...UserFields }
            ... on FeaturedPost { banner { ...ImageFields } }
            ...UserFields
        }
    "#)).unwrap();

    assert_eq!(fragment.name(), "PostFields");
    assert_eq!(fragment.source_type(), "Post");
    assert_eq!(fragment.fields().len(), 4);
    assert_eq!(
        fragment.fragment_dependencies().unwrap(),
        &["UserFields", "ImageFields", "UserFields"],
    );
    assert_eq!(fragment.num_fragment_dependencies(), 3);
}

#[test]
fn fragment_transform_failure_is_propagated() {
    let result = transform_fragment(&first_fragment(
        "fragment F on User { avatar(size: 1e400) }",
    ));

    assert!(
        matches!(result, Err(TransformError::InvalidValue { .. })),
        "unexpected result: {result:?}",
    );
}
