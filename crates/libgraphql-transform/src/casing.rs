//! Identifier casing helpers for use from templates.
//!
//! Identifiers are split into lowercase words at underscores and before every
//! uppercase letter. Every uppercase letter starts a new word, so a run of
//! uppercase letters (an acronym such as `HTTP`) becomes a run of one-letter
//! words and survives [`camel_case`]/[`pascal_case`] unchanged.

/// Split `input` into lowercase words.
///
/// ```
/// use libgraphql_transform::casing::split_by_case;
///
/// assert_eq!(split_by_case("Hello_World"), vec!["hello", "world"]);
/// assert_eq!(split_by_case("helloHTTP"), vec!["hello", "h", "t", "t", "p"]);
/// ```
pub fn split_by_case(input: &str) -> Vec<String> {
    let mut words = vec![];
    let mut word = String::new();
    for ch in input.chars() {
        if ch == '_' || ch.is_uppercase() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            if ch == '_' {
                continue;
            }
        }
        word.extend(ch.to_lowercase());
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// `hello_world` -> `helloWorld`
pub fn camel_case(input: &str) -> String {
    let mut words = split_by_case(input).into_iter();
    let first = words.next().unwrap_or_default();
    words.fold(first, |mut acc, word| {
        acc.push_str(&capitalize(&word));
        acc
    })
}

/// `hello_world` -> `HelloWorld`
pub fn pascal_case(input: &str) -> String {
    split_by_case(input)
        .iter()
        .map(|word| capitalize(word))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
