//! Keyword-level validation against raw schema fragments.

use serde_json::{json, Value};
use wtypes::{Error, Formats, Keyword, TypeBuilder, Validator};

fn assert_valid(schema: Value, value: Value) {
    let result = Validator::new().validate_schema(&value, &schema);
    assert!(result.is_ok(), "expected {value} to satisfy {schema}, got {result:?}");
}

fn assert_fails(schema: Value, value: Value, keyword: Keyword) {
    match Validator::new().validate_schema(&value, &schema) {
        Err(Error::Validation(err)) => assert_eq!(err.keyword, Some(keyword), "{err}"),
        other => panic!("expected {value} to fail `{keyword}` of {schema}, got {other:?}"),
    }
}

#[test]
fn type_keyword() {
    assert_valid(json!({"type": "integer"}), json!(3));
    assert_valid(json!({"type": "integer"}), json!(3.0));
    assert_fails(json!({"type": "integer"}), json!(3.5), Keyword::Type);
    assert_valid(json!({"type": "number"}), json!(3));
    assert_valid(json!({"type": ["string", "null"]}), json!(null));
    assert_fails(json!({"type": ["string", "null"]}), json!(false), Keyword::Type);
}

#[test]
fn numeric_bounds() {
    let schema = json!({"minimum": 1, "exclusiveMaximum": 3});
    assert_valid(schema.clone(), json!(1));
    assert_valid(schema.clone(), json!(2.999));
    assert_fails(schema.clone(), json!(3), Keyword::ExclusiveMaximum);
    assert_fails(schema, json!(0.5), Keyword::Minimum);
    assert_valid(json!({"multipleOf": 0.5}), json!(1.5));
    assert_fails(json!({"multipleOf": 2}), json!(7), Keyword::MultipleOf);
    // Bounds ignore non-numbers.
    assert_valid(json!({"minimum": 10}), json!("text"));
}

#[test]
fn literals() {
    assert_valid(json!({"enum": [1, "a", [1]]}), json!([1]));
    assert_valid(json!({"enum": [1]}), json!(1.0));
    assert_fails(json!({"enum": [1, "a"]}), json!("b"), Keyword::Enum);
    assert_valid(json!({"const": {"a": [1, 2]}}), json!({"a": [1, 2]}));
    assert_fails(json!({"const": {"a": [1, 2]}}), json!({"a": [2, 1]}), Keyword::Const);
}

#[test]
fn arrays() {
    let tuple = json!({"items": [{"type": "string"}], "additionalItems": {"type": "integer"}});
    assert_valid(tuple.clone(), json!(["a", 1, 2]));
    assert_fails(tuple, json!(["a", "b"]), Keyword::Type);

    let closed = json!({"items": [{"type": "string"}], "additionalItems": false});
    assert_valid(closed.clone(), json!(["a"]));
    assert_fails(closed, json!(["a", "b"]), Keyword::AdditionalItems);

    assert_fails(json!({"uniqueItems": true}), json!([1, 1.0]), Keyword::UniqueItems);
    assert_valid(json!({"uniqueItems": true}), json!([{"a": 1}, {"a": 2}]));
    assert_fails(json!({"minItems": 2}), json!([1]), Keyword::MinItems);
    assert_fails(json!({"maxItems": 1}), json!([1, 2]), Keyword::MaxItems);
    assert_valid(json!({"contains": {"type": "null"}}), json!([1, null]));
    assert_fails(json!({"contains": {"type": "null"}}), json!([1, 2]), Keyword::Contains);
}

#[test]
fn objects() {
    let schema = json!({
        "properties": {"id": {"type": "integer"}},
        "patternProperties": {"^x-": {"type": "string"}},
        "additionalProperties": false
    });
    assert_valid(schema.clone(), json!({"id": 1, "x-note": "n"}));
    assert_fails(schema.clone(), json!({"x-note": 1}), Keyword::Type);
    assert_fails(schema, json!({"other": 1}), Keyword::AdditionalProperties);

    assert_fails(
        json!({"propertyNames": {"maxLength": 3}}),
        json!({"long-name": 1}),
        Keyword::MaxLength,
    );
    assert_fails(json!({"minProperties": 1}), json!({}), Keyword::MinProperties);
    assert_fails(json!({"maxProperties": 0}), json!({"a": 1}), Keyword::MaxProperties);
}

#[test]
fn dependencies() {
    let schema = json!({
        "dependencies": {
            "card": ["billing"],
            "gift": {"required": ["recipient"]}
        }
    });
    assert_valid(schema.clone(), json!({"name": "x"}));
    assert_valid(schema.clone(), json!({"card": 1, "billing": 2}));
    assert_fails(schema.clone(), json!({"card": 1}), Keyword::Dependencies);
    assert_fails(schema, json!({"gift": true}), Keyword::Required);
}

#[test]
fn conditionals() {
    let schema = json!({
        "if": {"properties": {"kind": {"const": "circle"}}},
        "then": {"required": ["radius"]},
        "else": {"required": ["width"]}
    });
    assert_valid(schema.clone(), json!({"kind": "circle", "radius": 1}));
    assert_valid(schema.clone(), json!({"kind": "square", "width": 1}));
    assert_fails(schema.clone(), json!({"kind": "circle", "width": 1}), Keyword::Required);
    assert_fails(schema, json!({"kind": "square"}), Keyword::Required);
}

#[test]
fn errors_point_into_nested_values() {
    let schema = json!({
        "properties": {
            "points": {"items": {"properties": {"x": {"type": "number"}}}}
        }
    });
    let value = json!({"points": [{"x": 1}, {"x": "one"}]});
    let err = Validator::new().validate_schema(&value, &schema).unwrap_err();
    let err = err.as_validation().unwrap();
    assert_eq!(err.pointer(), "/points/1/x");
    assert_eq!(err.value, json!("one"));
    assert!(err.to_string().ends_with("(at '/points/1/x')"));
}

#[test]
fn hard_errors_escape_combinators() {
    let v = Validator::new();
    let unknown = json!({"anyOf": [{"format": "nope"}, {"type": "string"}]});
    assert!(matches!(
        v.validate_schema(&json!("s"), &unknown),
        Err(Error::UnknownFormat { .. })
    ));

    let unresolved = json!({"not": {"$ref": "Missing"}});
    assert!(matches!(
        v.validate_schema(&json!(1), &unresolved),
        Err(Error::Unresolved(_))
    ));

    let malformed = json!({"oneOf": [{"minLength": "two"}]});
    assert!(matches!(
        v.validate_schema(&json!("s"), &malformed),
        Err(Error::Definition(_))
    ));
}

#[test]
fn format_types() {
    let t = TypeBuilder::new();
    let v = Validator::new();
    assert!(v.is_valid(&t.Email(), &json!("ada@example.com")));
    assert!(!v.is_valid(&t.Email(), &json!("ada")));
    assert!(v.is_valid(&t.Datetime(), &json!("2024-02-29T12:00:00Z")));
    assert!(!v.is_valid(&t.Datetime(), &json!("2023-02-29T12:00:00Z")));
    assert!(v.is_valid(&t.Ipv4(), &json!("10.0.0.1")));
    assert!(v.is_valid(&t.Color(), &json!("#fff")));
    assert!(!v.is_valid(&t.Uri(), &json!("not a uri")));

    let bare = Validator::new().with_formats(Formats::empty());
    assert!(matches!(
        bare.validate(&t.Email(), &json!("ada@example.com")),
        Err(Error::UnknownFormat { .. })
    ));
}
