use crate::casing::camel_case;
use crate::casing::pascal_case;
use crate::casing::split_by_case;

#[test]
fn split_by_case_handles_words_underscores_and_acronyms() {
    let cases: &[(&str, &[&str])] = &[
        ("hello", &["hello"]),
        ("helloWorld", &["hello", "world"]),
        ("HelloWorld", &["hello", "world"]),
        ("hello_world", &["hello", "world"]),
        ("Hello_World", &["hello", "world"]),
        ("helloHTTP", &["hello", "h", "t", "t", "p"]),
        ("HelloHTTP", &["hello", "h", "t", "t", "p"]),
        ("hello_http", &["hello", "http"]),
    ];

    for (input, expected) in cases {
        assert_eq!(&split_by_case(input), expected, "splitting `{input}`");
    }
}

#[test]
fn split_by_case_drops_empty_words() {
    assert_eq!(split_by_case("__hello__world_"), vec!["hello", "world"]);
    assert!(split_by_case("").is_empty());
    assert!(split_by_case("___").is_empty());
}

#[test]
fn camel_case_table() {
    for (input, expected) in [
        ("hello", "hello"),
        ("helloWorld", "helloWorld"),
        ("HelloWorld", "helloWorld"),
        ("hello_world", "helloWorld"),
        ("Hello_World", "helloWorld"),
        ("helloHTTP", "helloHTTP"),
        ("HelloHTTP", "helloHTTP"),
        ("hello_http", "helloHttp"),
        ("", ""),
    ] {
        assert_eq!(camel_case(input), expected, "camelCasing `{input}`");
    }
}

#[test]
fn pascal_case_table() {
    for (input, expected) in [
        ("hello", "Hello"),
        ("helloWorld", "HelloWorld"),
        ("HelloWorld", "HelloWorld"),
        ("hello_world", "HelloWorld"),
        ("Hello_World", "HelloWorld"),
        ("helloHTTP", "HelloHTTP"),
        ("HelloHTTP", "HelloHTTP"),
        ("hello_http", "HelloHttp"),
        ("", ""),
    ] {
        assert_eq!(pascal_case(input), expected, "PascalCasing `{input}`");
    }
}
