use crate::commands::build_target;
use crate::config::Config;
use std::path::Path;

fn write(root: &Path, relative_path: &str, content: &str) {
    let path = root.join(relative_path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn config_for(root: &Path) -> Config {
    Config::from_json_str(
        r#"{
            "targets": [{
                "schema": ["./graphql/**/*.graphql"],
                "template": "./templates/names.hbs",
                "output": "./out/names.txt"
            }]
        }"#,
        root,
    ).unwrap()
}

#[test]
fn builds_one_output_from_all_matched_documents() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "graphql/b/posts.graphql", r#"
        fragment PostFields on Post { id author { ...UserFields } }
        mutation CreatePost { createPost { ...PostFields } }
    "#);
    write(dir.path(), "graphql/a/users.graphql", r#"
        fragment UserFields on User { id name }
        query GetUser($id: ID!) { user(id: $id) { ...UserFields } }
    "#);
    write(
        dir.path(),
        "templates/names.hbs",
        "{{#each fragments}}{{name}} {{/each}}|{{#each queries}}{{name}} {{/each}}|{{#each mutations}}{{name}}{{/each}}",
    );

    let config = config_for(dir.path());
    build_target(&config.targets()[0]).unwrap();

    let output = std::fs::read_to_string(dir.path().join("out/names.txt")).unwrap();
    assert_eq!(output, "UserFields PostFields |GetUser |CreatePost");
}

#[test]
fn output_is_overwritten_not_appended() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "graphql/ops.graphql", "query A { a }");
    write(dir.path(), "templates/names.hbs", "{{#each queries}}{{name}}{{/each}}");
    write(dir.path(), "out/names.txt", "stale content that is longer than the output");

    let config = config_for(dir.path());
    build_target(&config.targets()[0]).unwrap();

    let output = std::fs::read_to_string(dir.path().join("out/names.txt")).unwrap();
    assert_eq!(output, "A");
}

#[test]
fn invalid_document_fails_the_target() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "graphql/schema.graphql", "type User { id: ID! }");
    write(dir.path(), "templates/names.hbs", "");

    let config = config_for(dir.path());
    let err = build_target(&config.targets()[0]).unwrap_err();

    assert!(format!("{err:#}").contains("ObjectTypeDefinition"), "{err:#}");
    assert!(!dir.path().join("out/names.txt").exists());
}
