//! SchemaDocument - the constraint set a type enforces.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use wtypes_util::deep_equal;

use super::keyword::{Keyword, SimpleType};

/// An insertion-ordered schema document.
///
/// Serializes as the plain draft-7 JSON object it wraps. Documents are
/// treated as immutable once a type holds them; composition works on copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDocument(Map<String, Value>);

impl SchemaDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wraps a JSON object. Returns `None` for any other value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, keyword: Keyword) -> Option<&Value> {
        self.0.get(keyword.as_str())
    }

    pub fn contains(&self, keyword: Keyword) -> bool {
        self.0.contains_key(keyword.as_str())
    }

    pub fn insert(&mut self, keyword: Keyword, value: Value) -> Option<Value> {
        self.0.insert(keyword.as_str().to_string(), value)
    }

    pub fn remove(&mut self, keyword: Keyword) -> Option<Value> {
        self.0.shift_remove(keyword.as_str())
    }

    /// Builder form of [`SchemaDocument::insert`].
    pub fn with(mut self, keyword: Keyword, value: impl Into<Value>) -> Self {
        self.insert(keyword, value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.get(Keyword::Title).and_then(Value::as_str)
    }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.get(Keyword::Properties).and_then(Value::as_object)
    }

    /// The sub-schema declared for the property `name`.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties().and_then(|p| p.get(name))
    }

    pub fn required(&self) -> Vec<&str> {
        self.get(Keyword::Required)
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// The declared simple types; empty when `type` is absent.
    pub fn simple_types(&self) -> Vec<SimpleType> {
        match self.get(Keyword::Type) {
            Some(Value::String(name)) => SimpleType::parse(name).into_iter().collect(),
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .filter_map(SimpleType::parse)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Merges `other` into this document, `other` winning.
    ///
    /// Scalar keys (including `type`) overwrite. `properties` and
    /// `patternProperties` merge per member, recursively. `required`
    /// concatenates without duplicates, and `allOf` / `anyOf` / `oneOf`
    /// concatenate, skipping entries structurally equal to one already
    /// present.
    pub fn merge(&mut self, other: &SchemaDocument) {
        merge_maps(&mut self.0, &other.0);
    }

    pub fn merged(&self, other: &SchemaDocument) -> SchemaDocument {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// A copy with `required` emptied, for checking a subset of members.
    pub fn without_required(&self) -> SchemaDocument {
        let mut out = self.clone();
        if out.contains(Keyword::Required) {
            out.insert(Keyword::Required, Value::Array(Vec::new()));
        }
        out
    }
}

impl From<Map<String, Value>> for SchemaDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<SchemaDocument> for Value {
    fn from(doc: SchemaDocument) -> Self {
        Value::Object(doc.0)
    }
}

fn merge_maps(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        if !target.contains_key(key) {
            target.insert(key.clone(), incoming.clone());
            continue;
        }
        let Some(current) = target.get_mut(key) else {
            continue;
        };
        match Keyword::parse(key) {
            Some(Keyword::Properties | Keyword::PatternProperties) => {
                merge_members(current, incoming)
            }
            Some(Keyword::Required) => append_unique(current, incoming),
            Some(Keyword::AllOf | Keyword::AnyOf | Keyword::OneOf) => {
                append_unique(current, incoming)
            }
            _ => *current = incoming.clone(),
        }
    }
}

fn merge_members(current: &mut Value, incoming: &Value) {
    match (current, incoming) {
        (Value::Object(members), Value::Object(incoming)) => {
            for (name, schema) in incoming {
                match (members.get_mut(name), schema) {
                    (Some(Value::Object(existing)), Value::Object(schema)) => {
                        merge_maps(existing, schema)
                    }
                    _ => {
                        members.insert(name.clone(), schema.clone());
                    }
                }
            }
        }
        (current, incoming) => *current = incoming.clone(),
    }
}

fn append_unique(current: &mut Value, incoming: &Value) {
    match (current, incoming) {
        (Value::Array(entries), Value::Array(incoming)) => {
            for entry in incoming {
                if !entries.iter().any(|present| deep_equal(present, entry)) {
                    entries.push(entry.clone());
                }
            }
        }
        (current, incoming) => *current = incoming.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> SchemaDocument {
        SchemaDocument::from_value(value).unwrap()
    }

    #[test]
    fn scalars_overwrite() {
        let mut a = doc(json!({"type": "integer", "minimum": 1}));
        a.merge(&doc(json!({"type": "number", "maximum": 5})));
        assert_eq!(a.to_value(), json!({"type": "number", "minimum": 1, "maximum": 5}));
    }

    #[test]
    fn properties_merge_per_member() {
        let mut a = doc(json!({"properties": {"a": {"type": "string"}, "b": {"type": "integer"}}}));
        a.merge(&doc(json!({"properties": {"a": {"default": "x"}, "c": {}}})));
        assert_eq!(
            a.to_value(),
            json!({"properties": {
                "a": {"type": "string", "default": "x"},
                "b": {"type": "integer"},
                "c": {}
            }})
        );
    }

    #[test]
    fn required_deduplicates() {
        let mut a = doc(json!({"required": ["a", "b"]}));
        a.merge(&doc(json!({"required": ["b", "c"]})));
        assert_eq!(a.required(), vec!["a", "b", "c"]);
    }

    #[test]
    fn combinators_concatenate() {
        let mut a = doc(json!({"anyOf": [{"type": "integer"}]}));
        a.merge(&doc(json!({"anyOf": [{"type": "integer"}, {"type": "string"}]})));
        assert_eq!(
            a.get(Keyword::AnyOf),
            Some(&json!([{"type": "integer"}, {"type": "string"}]))
        );
    }

    #[test]
    fn merging_a_copy_changes_nothing() {
        let a = doc(json!({
            "type": "object",
            "properties": {"name": {"type": "string"}},
            "required": ["name"],
            "allOf": [{"minProperties": 1}]
        }));
        assert_eq!(a.merged(&a), a);
    }

    #[test]
    fn without_required_keeps_everything_else() {
        let a = doc(json!({"type": "object", "required": ["name"], "maxProperties": 3}));
        let relaxed = a.without_required();
        assert!(relaxed.required().is_empty());
        assert_eq!(relaxed.get(Keyword::MaxProperties), Some(&json!(3)));
        let untouched = doc(json!({"type": "object"}));
        assert!(!untouched.without_required().contains(Keyword::Required));
    }

    #[test]
    fn simple_types_read_both_forms() {
        assert_eq!(doc(json!({"type": "string"})).simple_types(), vec![SimpleType::String]);
        assert_eq!(
            doc(json!({"type": ["integer", "null"]})).simple_types(),
            vec![SimpleType::Integer, SimpleType::Null]
        );
        assert!(SchemaDocument::new().simple_types().is_empty());
    }
}
