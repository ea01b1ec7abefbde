//! The fixed meta-schema, written as code.
//!
//! Every document a type holds has passed [`validate_document`]: the keyword
//! vocabulary is closed, keyword values have their draft-7 shapes, and bound
//! pairs do not contradict each other.

use regex::Regex;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

use wtypes_util::{compare_numbers, exact_integer, format_json_pointer};

use crate::error::SchemaDefinitionError;
use crate::schema::{Keyword, SchemaDocument, SimpleType};

type MetaResult = Result<(), SchemaDefinitionError>;

/// Checks a document against the meta-schema.
pub fn validate_document(doc: &SchemaDocument) -> MetaResult {
    let mut path = Vec::new();
    check_object(doc.as_map(), &mut path)
}

/// Non-throwing form of [`validate_document`].
pub fn is_meta_valid(doc: &SchemaDocument) -> bool {
    validate_document(doc).is_ok()
}

fn violation(path: &[String], reason: impl Into<String>) -> SchemaDefinitionError {
    SchemaDefinitionError::new(format_json_pointer(path), reason)
}

// ── Schema positions ────────────────────────────────────────────────────────

fn check_schema(schema: &Value, path: &mut Vec<String>) -> MetaResult {
    match schema {
        Value::Bool(_) => Ok(()),
        Value::Object(map) => check_object(map, path),
        _ => Err(violation(path, "a schema must be an object or a boolean")),
    }
}

fn check_object(map: &Map<String, Value>, path: &mut Vec<String>) -> MetaResult {
    for (key, value) in map {
        let Some(keyword) = Keyword::parse(key) else {
            path.push(key.clone());
            let err = violation(path, format!("unknown keyword `{key}`"));
            path.pop();
            return Err(err);
        };
        path.push(key.clone());
        let result = check_keyword(keyword, value, path);
        path.pop();
        result?;
    }
    check_contradictions(map, path)
}

fn check_keyword(keyword: Keyword, value: &Value, path: &mut Vec<String>) -> MetaResult {
    match keyword {
        Keyword::Type => check_type(value, path),
        Keyword::Properties => check_schema_map(value, path, false),
        Keyword::PatternProperties => check_schema_map(value, path, true),
        Keyword::Dependencies => check_dependencies(value, path),
        Keyword::Required => check_string_set(value, path),
        Keyword::Items => match value {
            Value::Array(_) => check_schema_list(value, path, false),
            _ => check_schema(value, path),
        },
        Keyword::AdditionalItems
        | Keyword::AdditionalProperties
        | Keyword::PropertyNames
        | Keyword::Contains
        | Keyword::Not
        | Keyword::If
        | Keyword::Then
        | Keyword::Else => check_schema(value, path),
        Keyword::AllOf | Keyword::AnyOf | Keyword::OneOf => check_schema_list(value, path, true),
        Keyword::MinProperties
        | Keyword::MaxProperties
        | Keyword::MinLength
        | Keyword::MaxLength
        | Keyword::MinItems
        | Keyword::MaxItems => match value.as_number().and_then(exact_integer) {
            Some(n) if n >= 0 => Ok(()),
            _ => Err(violation(path, "must be a non-negative integer")),
        },
        Keyword::Minimum
        | Keyword::Maximum
        | Keyword::ExclusiveMinimum
        | Keyword::ExclusiveMaximum => match value {
            Value::Number(_) => Ok(()),
            _ => Err(violation(path, "must be a number")),
        },
        Keyword::MultipleOf => match value.as_f64() {
            Some(n) if n > 0.0 => Ok(()),
            _ => Err(violation(path, "must be a number greater than 0")),
        },
        Keyword::Pattern => match value {
            Value::String(pattern) => check_regex(pattern, path),
            _ => Err(violation(path, "must be a string")),
        },
        Keyword::Format
        | Keyword::ContentMediaType
        | Keyword::ContentEncoding
        | Keyword::Title
        | Keyword::Description
        | Keyword::Comment
        | Keyword::Ref => match value {
            Value::String(_) => Ok(()),
            _ => Err(violation(path, "must be a string")),
        },
        Keyword::Enum | Keyword::Examples => match value {
            Value::Array(_) => Ok(()),
            _ => Err(violation(path, "must be an array")),
        },
        Keyword::UniqueItems => match value {
            Value::Bool(_) => Ok(()),
            _ => Err(violation(path, "must be a boolean")),
        },
        Keyword::Const | Keyword::Default => Ok(()),
    }
}

fn check_type(value: &Value, path: &[String]) -> MetaResult {
    let is_simple = |v: &Value| v.as_str().and_then(SimpleType::parse).is_some();
    match value {
        Value::String(_) if is_simple(value) => Ok(()),
        Value::Array(names) if !names.is_empty() && names.iter().all(is_simple) => {
            if has_duplicates(names) {
                Err(violation(path, "type names must be unique"))
            } else {
                Ok(())
            }
        }
        _ => Err(violation(
            path,
            "must be a simple type name or a non-empty list of them",
        )),
    }
}

fn check_schema_map(value: &Value, path: &mut Vec<String>, keys_are_patterns: bool) -> MetaResult {
    let Value::Object(members) = value else {
        return Err(violation(path, "must be an object of schemas"));
    };
    for (name, schema) in members {
        path.push(name.clone());
        let result = if keys_are_patterns {
            check_regex(name, path).and_then(|()| check_schema(schema, path))
        } else {
            check_schema(schema, path)
        };
        path.pop();
        result?;
    }
    Ok(())
}

fn check_schema_list(value: &Value, path: &mut Vec<String>, non_empty: bool) -> MetaResult {
    let Value::Array(schemas) = value else {
        return Err(violation(path, "must be an array of schemas"));
    };
    if non_empty && schemas.is_empty() {
        return Err(violation(path, "must list at least one schema"));
    }
    for (i, schema) in schemas.iter().enumerate() {
        path.push(i.to_string());
        let result = check_schema(schema, path);
        path.pop();
        result?;
    }
    Ok(())
}

fn check_dependencies(value: &Value, path: &mut Vec<String>) -> MetaResult {
    let Value::Object(members) = value else {
        return Err(violation(path, "must be an object"));
    };
    for (name, dependency) in members {
        path.push(name.clone());
        let result = match dependency {
            Value::Array(_) => check_string_set(dependency, path),
            _ => check_schema(dependency, path),
        };
        path.pop();
        result?;
    }
    Ok(())
}

fn check_string_set(value: &Value, path: &[String]) -> MetaResult {
    match value {
        Value::Array(names) if names.iter().all(Value::is_string) => {
            if has_duplicates(names) {
                Err(violation(path, "names must be unique"))
            } else {
                Ok(())
            }
        }
        _ => Err(violation(path, "must be an array of strings")),
    }
}

fn check_regex(pattern: &str, path: &[String]) -> MetaResult {
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| violation(path, format!("invalid regular expression: {e}")))
}

fn has_duplicates(values: &[Value]) -> bool {
    values
        .iter()
        .enumerate()
        .any(|(i, v)| values[..i].contains(v))
}

// ── Contradictions ──────────────────────────────────────────────────────────

fn number_at<'a>(map: &'a Map<String, Value>, keyword: Keyword) -> Option<&'a Number> {
    map.get(keyword.as_str()).and_then(Value::as_number)
}

fn check_contradictions(map: &Map<String, Value>, path: &[String]) -> MetaResult {
    // (lower, upper, an equal pair is also empty)
    const PAIRS: &[(Keyword, Keyword, bool)] = &[
        (Keyword::Minimum, Keyword::Maximum, false),
        (Keyword::ExclusiveMinimum, Keyword::ExclusiveMaximum, true),
        (Keyword::Minimum, Keyword::ExclusiveMaximum, true),
        (Keyword::ExclusiveMinimum, Keyword::Maximum, true),
        (Keyword::MinLength, Keyword::MaxLength, false),
        (Keyword::MinItems, Keyword::MaxItems, false),
        (Keyword::MinProperties, Keyword::MaxProperties, false),
    ];
    for &(lower, upper, equal_is_empty) in PAIRS {
        let (Some(lo), Some(hi)) = (number_at(map, lower), number_at(map, upper)) else {
            continue;
        };
        let contradicts = match compare_numbers(lo, hi) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => equal_is_empty,
            _ => false,
        };
        if contradicts {
            return Err(violation(
                path,
                format!("`{lower}` of {lo} contradicts `{upper}` of {hi}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value) -> MetaResult {
        validate_document(&SchemaDocument::from_value(value).unwrap())
    }

    #[test]
    fn accepts_well_formed_documents() {
        assert!(check(json!({})).is_ok());
        assert!(check(json!({
            "type": ["integer", "null"],
            "properties": {"a": {"type": "string", "pattern": "^a"}, "b": true},
            "required": ["a"],
            "items": [{"type": "integer"}, false],
            "anyOf": [{"minimum": 1}, {"maximum": 0}],
            "dependencies": {"a": ["b"], "b": {"required": ["a"]}},
            "$ref": "Other"
        }))
        .is_ok());
    }

    #[test]
    fn unknown_keyword_is_rejected_with_its_location() {
        let err = check(json!({"properties": {"a": {"minimun": 1}}})).unwrap_err();
        assert_eq!(err.pointer, "/properties/a/minimun");
        assert!(err.reason.contains("unknown keyword"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(check(json!({"type": "int"})).is_err());
        assert!(check(json!({"type": []})).is_err());
        assert!(check(json!({"type": ["string", "string"]})).is_err());
        assert!(check(json!({"minLength": -1})).is_err());
        assert!(check(json!({"minLength": 1.5})).is_err());
        assert!(check(json!({"multipleOf": 0})).is_err());
        assert!(check(json!({"pattern": "("})).is_err());
        assert!(check(json!({"patternProperties": {"(": {}}})).is_err());
        assert!(check(json!({"required": ["a", "a"]})).is_err());
        assert!(check(json!({"anyOf": []})).is_err());
        assert!(check(json!({"not": 3})).is_err());
        assert!(check(json!({"uniqueItems": "yes"})).is_err());
    }

    #[test]
    fn rejects_contradictory_bounds() {
        assert!(check(json!({"minimum": 5, "maximum": 4})).is_err());
        assert!(check(json!({"minimum": 5, "maximum": 5})).is_ok());
        assert!(check(json!({"exclusiveMinimum": 5, "exclusiveMaximum": 5})).is_err());
        assert!(check(json!({"minimum": 5, "exclusiveMaximum": 5})).is_err());
        assert!(check(json!({"exclusiveMinimum": 5, "maximum": 5.0})).is_err());
        assert!(check(json!({"minLength": 3, "maxLength": 2})).is_err());
        assert!(check(json!({"minItems": 1, "maxItems": 0})).is_err());
        assert!(check(json!({"minProperties": 2, "maxProperties": 1})).is_err());
        let nested = check(json!({"items": {"minimum": 2, "maximum": 1}})).unwrap_err();
        assert_eq!(nested.pointer, "/items");
    }
}
