use serde_json::Value;

/// Returns the JSON kind name of a value, as used by the schema `type` keyword.
///
/// Numbers always report `"number"`; whether a number also counts as an
/// `"integer"` is decided by [`crate::is_integral`].
///
/// ```
/// use serde_json::json;
/// use wtypes_util::kind_of;
///
/// assert_eq!(kind_of(&json!(1)), "number");
/// assert_eq!(kind_of(&json!({"a": 1})), "object");
/// ```
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
