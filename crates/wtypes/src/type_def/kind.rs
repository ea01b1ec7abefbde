use serde_json::{Map, Value};
use std::fmt;

use crate::schema::SimpleType;

/// The runtime value kind a type constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    Boolean,
    Null,
    Integer,
    Number,
    String,
    Array,
    Object,
    /// No single JSON kind: traits, combinators, forward references.
    Composite,
}

impl BaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Composite => "composite",
        }
    }

    pub fn simple_type(self) -> Option<SimpleType> {
        match self {
            Self::Boolean => Some(SimpleType::Boolean),
            Self::Null => Some(SimpleType::Null),
            Self::Integer => Some(SimpleType::Integer),
            Self::Number => Some(SimpleType::Number),
            Self::String => Some(SimpleType::String),
            Self::Array => Some(SimpleType::Array),
            Self::Object => Some(SimpleType::Object),
            Self::Composite => None,
        }
    }

    pub fn from_simple(simple: SimpleType) -> Self {
        match simple {
            SimpleType::Boolean => Self::Boolean,
            SimpleType::Null => Self::Null,
            SimpleType::Integer => Self::Integer,
            SimpleType::Number => Self::Number,
            SimpleType::String => Self::String,
            SimpleType::Array => Self::Array,
            SimpleType::Object => Self::Object,
        }
    }

    /// The value constructed when no argument and no default is given.
    pub fn zero_value(self) -> Value {
        match self {
            Self::Boolean => Value::Bool(false),
            Self::Null | Self::Composite => Value::Null,
            Self::Integer | Self::Number => Value::from(0),
            Self::String => Value::String(String::new()),
            Self::Array => Value::Array(Vec::new()),
            Self::Object => Value::Object(Map::new()),
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Number)
    }
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
