//! Error types.
//!
//! Each failure class of the engine has its own error struct; [`Error`] is the
//! umbrella returned by validator entry points and guards.

use serde_json::Value;
use thiserror::Error;
use wtypes_util::format_json_pointer;

use crate::schema::Keyword;

/// A value failed a schema clause.
///
/// Validation is fail-fast: the error describes the first clause that
/// rejected the value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{reason} (at '{}')", format_json_pointer(.path))]
pub struct ValidationError {
    /// The failing clause; `None` only for the `false` schema.
    pub keyword: Option<Keyword>,
    pub reason: String,
    /// The offending value.
    pub value: Value,
    /// The schema fragment holding the failing clause.
    pub schema: Value,
    /// Location of `value` inside the validated value.
    pub path: Vec<String>,
}

impl ValidationError {
    /// JSON Pointer of the offending value.
    pub fn pointer(&self) -> String {
        format_json_pointer(&self.path)
    }
}

/// A schema document is malformed or self-contradictory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid schema{} at '{pointer}': {reason}", type_suffix(.type_name))]
pub struct SchemaDefinitionError {
    /// Name of the type being defined, when known.
    pub type_name: Option<String>,
    /// JSON Pointer of the offending position inside the document.
    pub pointer: String,
    pub reason: String,
}

fn type_suffix(type_name: &Option<String>) -> String {
    match type_name {
        Some(name) => format!(" for type `{name}`"),
        None => String::new(),
    }
}

impl SchemaDefinitionError {
    pub fn new(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            type_name: None,
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }

    /// Attaches the name of the type whose definition failed.
    pub fn for_type(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }
}

/// A forward reference names no known type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unresolved type reference `{name}`: {reason}")]
pub struct UnresolvedReferenceError {
    pub name: String,
    pub reason: String,
}

/// A modifier-only type was instantiated directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot instantiate the type `{type_name}`")]
pub struct IllegalConstructionError {
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Definition(#[from] SchemaDefinitionError),
    #[error(transparent)]
    Unresolved(#[from] UnresolvedReferenceError),
    #[error(transparent)]
    IllegalConstruction(#[from] IllegalConstructionError),
    #[error("unknown format `{format}` (at '{}')", format_json_pointer(.path))]
    UnknownFormat { format: String, path: Vec<String> },
    #[error("schema nesting exceeds the depth limit of {0}")]
    RecursionLimit(usize),
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("values of type `{type_name}` are not {expected}")]
    NotAContainer {
        type_name: String,
        expected: &'static str,
    },
    #[error("key `{0}` is not present")]
    MissingKey(String),
}

impl Error {
    /// True for an ordinary validation failure. Every other variant is a hard
    /// error that no combinator branch may absorb.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_error_renders_pointer() {
        let err = ValidationError {
            keyword: Some(Keyword::Minimum),
            reason: "3 is less than the minimum of 5".into(),
            value: json!(3),
            schema: json!({"minimum": 5}),
            path: vec!["items".into(), "0".into()],
        };
        assert_eq!(err.to_string(), "3 is less than the minimum of 5 (at '/items/0')");
    }

    #[test]
    fn definition_error_names_type() {
        let err = SchemaDefinitionError::new("/minLength", "must be a non-negative integer")
            .for_type("Name");
        assert_eq!(
            err.to_string(),
            "invalid schema for type `Name` at '/minLength': must be a non-negative integer"
        );
        let anonymous = SchemaDefinitionError::new("", "boom");
        assert_eq!(anonymous.to_string(), "invalid schema at '': boom");
    }

    #[test]
    fn only_validation_failures_are_soft() {
        let soft: Error = ValidationError {
            keyword: None,
            reason: "rejected".into(),
            value: json!(null),
            schema: json!(false),
            path: vec![],
        }
        .into();
        assert!(soft.is_validation());
        assert!(!Error::RecursionLimit(3).is_validation());
        assert!(!Error::UnknownFormat {
            format: "x".into(),
            path: vec![]
        }
        .is_validation());
    }
}
