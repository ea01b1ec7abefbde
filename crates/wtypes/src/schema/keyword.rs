use serde_json::Value;
use std::fmt;

/// A constraint key of the schema vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Type,
    Properties,
    Required,
    Items,
    AdditionalItems,
    AdditionalProperties,
    PatternProperties,
    PropertyNames,
    Dependencies,
    MinProperties,
    MaxProperties,
    Minimum,
    Maximum,
    ExclusiveMinimum,
    ExclusiveMaximum,
    MultipleOf,
    MinLength,
    MaxLength,
    Pattern,
    Format,
    ContentMediaType,
    ContentEncoding,
    Enum,
    Const,
    AllOf,
    AnyOf,
    OneOf,
    Not,
    If,
    Then,
    Else,
    UniqueItems,
    MinItems,
    MaxItems,
    Contains,
    Default,
    Title,
    Description,
    Examples,
    Comment,
    Ref,
}

impl Keyword {
    pub const ALL: &'static [Keyword] = &[
        Self::Type,
        Self::Properties,
        Self::Required,
        Self::Items,
        Self::AdditionalItems,
        Self::AdditionalProperties,
        Self::PatternProperties,
        Self::PropertyNames,
        Self::Dependencies,
        Self::MinProperties,
        Self::MaxProperties,
        Self::Minimum,
        Self::Maximum,
        Self::ExclusiveMinimum,
        Self::ExclusiveMaximum,
        Self::MultipleOf,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::Format,
        Self::ContentMediaType,
        Self::ContentEncoding,
        Self::Enum,
        Self::Const,
        Self::AllOf,
        Self::AnyOf,
        Self::OneOf,
        Self::Not,
        Self::If,
        Self::Then,
        Self::Else,
        Self::UniqueItems,
        Self::MinItems,
        Self::MaxItems,
        Self::Contains,
        Self::Default,
        Self::Title,
        Self::Description,
        Self::Examples,
        Self::Comment,
        Self::Ref,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Properties => "properties",
            Self::Required => "required",
            Self::Items => "items",
            Self::AdditionalItems => "additionalItems",
            Self::AdditionalProperties => "additionalProperties",
            Self::PatternProperties => "patternProperties",
            Self::PropertyNames => "propertyNames",
            Self::Dependencies => "dependencies",
            Self::MinProperties => "minProperties",
            Self::MaxProperties => "maxProperties",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::ExclusiveMinimum => "exclusiveMinimum",
            Self::ExclusiveMaximum => "exclusiveMaximum",
            Self::MultipleOf => "multipleOf",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::Format => "format",
            Self::ContentMediaType => "contentMediaType",
            Self::ContentEncoding => "contentEncoding",
            Self::Enum => "enum",
            Self::Const => "const",
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
            Self::Not => "not",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::UniqueItems => "uniqueItems",
            Self::MinItems => "minItems",
            Self::MaxItems => "maxItems",
            Self::Contains => "contains",
            Self::Default => "default",
            Self::Title => "title",
            Self::Description => "description",
            Self::Examples => "examples",
            Self::Comment => "$comment",
            Self::Ref => "$ref",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The draft-7 simple type names accepted by `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleType {
    Null,
    Boolean,
    Object,
    Array,
    Number,
    Integer,
    String,
}

impl SimpleType {
    pub const ALL: &'static [SimpleType] = &[
        Self::Null,
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Number,
        Self::Integer,
        Self::String,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Whether `value` is an instance of this simple type. `integer` accepts
    /// any number with a zero fractional part, `number` accepts integers.
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Null, Value::Null) => true,
            (Self::Boolean, Value::Bool(_)) => true,
            (Self::Object, Value::Object(_)) => true,
            (Self::Array, Value::Array(_)) => true,
            (Self::Number, Value::Number(_)) => true,
            (Self::Integer, Value::Number(n)) => wtypes_util::is_integral(n),
            (Self::String, Value::String(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for SimpleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
