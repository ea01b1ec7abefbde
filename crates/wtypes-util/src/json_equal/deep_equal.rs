use serde_json::Value;

use crate::number::compare_numbers;

/// Performs a structural equality check between two JSON values.
///
/// Numbers compare by numeric value, so `1` and `1.0` are equal. Objects are
/// equal when they hold the same keys with equal values, in any order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wtypes_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": [1, 2]}), &json!({"a": [1.0, 2]})));
/// assert!(!deep_equal(&json!({"a": [1, 2]}), &json!({"a": [2, 1]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => {
            compare_numbers(a, b) == Some(std::cmp::Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(a, b)| deep_equal(a, b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a
                .iter()
                .all(|(key, val_a)| obj_b.get(key).is_some_and(|val_b| deep_equal(val_a, val_b)))
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives() {
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!(true), &json!(true)));
        assert!(!deep_equal(&json!(true), &json!(false)));
        assert!(deep_equal(&json!("x"), &json!("x")));
        assert!(!deep_equal(&json!("x"), &json!("y")));
    }

    #[test]
    fn integers_equal_integral_floats() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(!deep_equal(&json!(1), &json!(1.5)));
        assert!(deep_equal(&json!(-3), &json!(-3.0)));
    }

    #[test]
    fn different_kinds_are_never_equal() {
        assert!(!deep_equal(&json!(0), &json!(false)));
        assert!(!deep_equal(&json!(""), &json!(null)));
        assert!(!deep_equal(&json!([]), &json!({})));
    }

    #[test]
    fn objects_ignore_key_order() {
        let a = json!({"a": 1, "b": {"c": [1, 2]}});
        let b = json!({"b": {"c": [1, 2]}, "a": 1});
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &json!({"a": 1})));
    }
}
