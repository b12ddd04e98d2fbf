use crate::ast;
use crate::TransformError;

type Result<T> = std::result::Result<T, TransformError>;

/// Render an argument value back into GraphQL value syntax.
///
/// Scalars are rendered from their underlying representation: strings come
/// out unquoted (`"val"` -> `val`), enums as their name, booleans as
/// `true`/`false`. Lists and objects are rendered recursively as
/// `[a, b]` and `{key: value, other: value}`. Object entries come out in the
/// order the parser stores them, which for `graphql_parser` is sorted by key.
pub fn serialize_value(value: &ast::Value) -> Result<String> {
    Ok(match value {
        ast::Value::Variable(var_name) => format!("${var_name}"),

        // `graphql_parser` rejects ints outside `i64` while parsing.
        ast::Value::Int(number) => number.as_i64().unwrap_or_default().to_string(),

        ast::Value::Float(float) => {
            if !float.is_finite() {
                return Err(TransformError::InvalidValue {
                    kind: "FloatValue",
                    value: float.to_string(),
                });
            }
            // `{:?}` keeps a fractional part (or exponent) on whole numbers,
            // so `2.0` does not come back out as the int `2`.
            format!("{float:?}")
        },

        ast::Value::String(string) => string.to_owned(),

        ast::Value::Boolean(boolean) => boolean.to_string(),

        ast::Value::Null => "null".to_string(),

        ast::Value::Enum(enum_value) => enum_value.to_owned(),

        ast::Value::List(items) => {
            let items = items.iter()
                .map(serialize_value)
                .collect::<Result<Vec<_>>>()?;
            format!("[{}]", items.join(", "))
        },

        ast::Value::Object(entries) => {
            let entries = entries.iter()
                .map(|(key, value)| Ok(format!("{key}: {}", serialize_value(value)?)))
                .collect::<Result<Vec<_>>>()?;
            format!("{{{}}}", entries.join(", "))
        },
    })
}
