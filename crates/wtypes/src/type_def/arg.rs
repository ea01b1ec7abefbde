use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::descriptor::TypeDescriptor;
use super::kind::BaseKind;

/// The argument of bracket application.
///
/// Types contribute their document, a bare kind stands for its built-in
/// type, literals are taken as they are, and maps and lists resolve member
/// by member.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaArg {
    Type(TypeDescriptor),
    Kind(BaseKind),
    Literal(Value),
    Map(IndexMap<String, SchemaArg>),
    List(Vec<SchemaArg>),
}

impl SchemaArg {
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<SchemaArg>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn list<V: Into<SchemaArg>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Resolves the argument to the JSON value stored under a keyword.
    pub fn resolve(&self) -> Value {
        match self {
            Self::Type(ty) => ty.schema().to_value(),
            Self::Kind(kind) => kind_schema(*kind),
            Self::Literal(value) => value.clone(),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.resolve()))
                    .collect::<Map<String, Value>>(),
            ),
            Self::List(items) => Value::Array(items.iter().map(SchemaArg::resolve).collect()),
        }
    }
}

fn kind_schema(kind: BaseKind) -> Value {
    let mut schema = Map::new();
    if let Some(simple) = kind.simple_type() {
        schema.insert("type".to_string(), Value::from(simple.as_str()));
    }
    Value::Object(schema)
}

impl From<TypeDescriptor> for SchemaArg {
    fn from(ty: TypeDescriptor) -> Self {
        Self::Type(ty)
    }
}

impl From<&TypeDescriptor> for SchemaArg {
    fn from(ty: &TypeDescriptor) -> Self {
        Self::Type(ty.clone())
    }
}

impl From<BaseKind> for SchemaArg {
    fn from(kind: BaseKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<Value> for SchemaArg {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

macro_rules! literal_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SchemaArg {
                fn from(value: $t) -> Self {
                    Self::Literal(Value::from(value))
                }
            }
        )*
    };
}

literal_from!(bool, i32, i64, u32, u64, f64, &str, String);

impl<T: Into<SchemaArg>> From<Vec<T>> for SchemaArg {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<V: Into<SchemaArg>> From<IndexMap<String, V>> for SchemaArg {
    fn from(entries: IndexMap<String, V>) -> Self {
        Self::map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_resolve_to_their_type_keyword() {
        assert_eq!(SchemaArg::from(BaseKind::Integer).resolve(), json!({"type": "integer"}));
        assert_eq!(SchemaArg::from(BaseKind::Composite).resolve(), json!({}));
    }

    #[test]
    fn nested_arguments_resolve_member_by_member() {
        let arg = SchemaArg::map([
            ("a", SchemaArg::from(BaseKind::String)),
            ("b", SchemaArg::list(vec![BaseKind::Integer, BaseKind::Null])),
        ]);
        assert_eq!(
            arg.resolve(),
            json!({"a": {"type": "string"}, "b": [{"type": "integer"}, {"type": "null"}]})
        );
        assert_eq!(SchemaArg::from("^a").resolve(), json!("^a"));
    }
}
