//! Modifier traits - types that exist to contribute one keyword.

use serde_json::Value;
use std::fmt;

use wtypes_util::lower_key;

use super::arg::SchemaArg;
use super::descriptor::{TypeDescriptor, TypeFlags};
use super::factory::TypeFactory;
use super::kind::BaseKind;
use crate::error::SchemaDefinitionError;
use crate::schema::{Keyword, SchemaDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Title,
    Description,
    Default,
    Examples,
    Const,
    Enum,
    MultipleOf,
    Minimum,
    Maximum,
    ExclusiveMinimum,
    ExclusiveMaximum,
    Properties,
    AdditionalProperties,
    Required,
    MinProperties,
    MaxProperties,
    PropertyNames,
    Dependencies,
    PatternProperties,
    MinLength,
    MaxLength,
    Pattern,
    Format,
    ContentMediaType,
    ContentEncoding,
    Items,
    AdditionalItems,
    Contains,
    UniqueItems,
    MinItems,
    MaxItems,
    AllOf,
    AnyOf,
    OneOf,
    Not,
    If,
    Then,
    Else,
}

impl Modifier {
    pub const ALL: &'static [Modifier] = &[
        Self::Title,
        Self::Description,
        Self::Default,
        Self::Examples,
        Self::Const,
        Self::Enum,
        Self::MultipleOf,
        Self::Minimum,
        Self::Maximum,
        Self::ExclusiveMinimum,
        Self::ExclusiveMaximum,
        Self::Properties,
        Self::AdditionalProperties,
        Self::Required,
        Self::MinProperties,
        Self::MaxProperties,
        Self::PropertyNames,
        Self::Dependencies,
        Self::PatternProperties,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::Format,
        Self::ContentMediaType,
        Self::ContentEncoding,
        Self::Items,
        Self::AdditionalItems,
        Self::Contains,
        Self::UniqueItems,
        Self::MinItems,
        Self::MaxItems,
        Self::AllOf,
        Self::AnyOf,
        Self::OneOf,
        Self::Not,
        Self::If,
        Self::Then,
        Self::Else,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Default => "Default",
            Self::Examples => "Examples",
            Self::Const => "Const",
            Self::Enum => "Enum",
            Self::MultipleOf => "MultipleOf",
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::ExclusiveMinimum => "ExclusiveMinimum",
            Self::ExclusiveMaximum => "ExclusiveMaximum",
            Self::Properties => "Properties",
            Self::AdditionalProperties => "AdditionalProperties",
            Self::Required => "Required",
            Self::MinProperties => "MinProperties",
            Self::MaxProperties => "MaxProperties",
            Self::PropertyNames => "PropertyNames",
            Self::Dependencies => "Dependencies",
            Self::PatternProperties => "PatternProperties",
            Self::MinLength => "MinLength",
            Self::MaxLength => "MaxLength",
            Self::Pattern => "Pattern",
            Self::Format => "Format",
            Self::ContentMediaType => "ContentMediaType",
            Self::ContentEncoding => "ContentEncoding",
            Self::Items => "Items",
            Self::AdditionalItems => "AdditionalItems",
            Self::Contains => "Contains",
            Self::UniqueItems => "UniqueItems",
            Self::MinItems => "MinItems",
            Self::MaxItems => "MaxItems",
            Self::AllOf => "AllOf",
            Self::AnyOf => "AnyOf",
            Self::OneOf => "OneOf",
            Self::Not => "Not",
            Self::If => "If",
            Self::Then => "Then",
            Self::Else => "Else",
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            Self::Title => Keyword::Title,
            Self::Description => Keyword::Description,
            Self::Default => Keyword::Default,
            Self::Examples => Keyword::Examples,
            Self::Const => Keyword::Const,
            Self::Enum => Keyword::Enum,
            Self::MultipleOf => Keyword::MultipleOf,
            Self::Minimum => Keyword::Minimum,
            Self::Maximum => Keyword::Maximum,
            Self::ExclusiveMinimum => Keyword::ExclusiveMinimum,
            Self::ExclusiveMaximum => Keyword::ExclusiveMaximum,
            Self::Properties => Keyword::Properties,
            Self::AdditionalProperties => Keyword::AdditionalProperties,
            Self::Required => Keyword::Required,
            Self::MinProperties => Keyword::MinProperties,
            Self::MaxProperties => Keyword::MaxProperties,
            Self::PropertyNames => Keyword::PropertyNames,
            Self::Dependencies => Keyword::Dependencies,
            Self::PatternProperties => Keyword::PatternProperties,
            Self::MinLength => Keyword::MinLength,
            Self::MaxLength => Keyword::MaxLength,
            Self::Pattern => Keyword::Pattern,
            Self::Format => Keyword::Format,
            Self::ContentMediaType => Keyword::ContentMediaType,
            Self::ContentEncoding => Keyword::ContentEncoding,
            Self::Items => Keyword::Items,
            Self::AdditionalItems => Keyword::AdditionalItems,
            Self::Contains => Keyword::Contains,
            Self::UniqueItems => Keyword::UniqueItems,
            Self::MinItems => Keyword::MinItems,
            Self::MaxItems => Keyword::MaxItems,
            Self::AllOf => Keyword::AllOf,
            Self::AnyOf => Keyword::AnyOf,
            Self::OneOf => Keyword::OneOf,
            Self::Not => Keyword::Not,
            Self::If => Keyword::If,
            Self::Then => Keyword::Then,
            Self::Else => Keyword::Else,
        }
    }

    /// Looks a modifier up by its type name (`"MultipleOf"`) or its keyword
    /// (`"multipleOf"`).
    pub fn parse(name: &str) -> Option<Self> {
        let key = lower_key(name);
        Self::ALL.iter().copied().find(|m| m.keyword().as_str() == key)
    }

    /// Whether the modifier contributes no name when added onto a type.
    pub fn suppresses_title(self) -> bool {
        !matches!(
            self,
            Self::Examples
                | Self::Default
                | Self::Const
                | Self::Enum
                | Self::MultipleOf
                | Self::Minimum
                | Self::Maximum
                | Self::ExclusiveMinimum
                | Self::ExclusiveMaximum
                | Self::Pattern
                | Self::Not
                | Self::AnyOf
                | Self::AllOf
                | Self::OneOf
        )
    }

    /// Whether the applied form may be constructed on its own.
    pub fn is_instantiable(self) -> bool {
        matches!(self, Self::Enum | Self::Not)
    }

    fn wraps_single_argument(self) -> bool {
        matches!(
            self,
            Self::Required | Self::Enum | Self::Examples | Self::AllOf | Self::AnyOf | Self::OneOf
        )
    }

    pub fn flags(self) -> TypeFlags {
        TypeFlags {
            suppress_title: self.suppresses_title(),
            no_instantiate: !self.is_instantiable(),
            positional_items: false,
        }
    }

    /// The bare modifier type, carrying an empty document.
    pub fn descriptor(self) -> TypeDescriptor {
        TypeDescriptor::from_parts(
            self.name(),
            SchemaDocument::new(),
            BaseKind::Composite,
            self.flags(),
        )
    }

    /// Bracket application: stores the resolved argument under the
    /// modifier's keyword. List-valued keywords wrap a single argument.
    pub fn apply(self, arg: impl Into<SchemaArg>) -> Result<TypeDescriptor, SchemaDefinitionError> {
        let mut value = arg.into().resolve();
        if self.wraps_single_argument() && !value.is_array() {
            value = Value::Array(vec![value]);
        }
        let overrides = SchemaDocument::new().with(self.keyword(), value);
        TypeFactory::create(&self.descriptor(), self.name(), overrides)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyword_is_the_lower_camel_name() {
        for modifier in Modifier::ALL {
            assert_eq!(modifier.keyword().as_str(), lower_key(modifier.name()));
            assert_eq!(Modifier::parse(modifier.name()), Some(*modifier));
        }
        assert_eq!(Modifier::parse("minLength"), Some(Modifier::MinLength));
        assert_eq!(Modifier::parse("Bogus"), None);
    }

    #[test]
    fn applied_modifiers_hold_one_keyword() {
        let m = Modifier::MultipleOf.apply(3).unwrap();
        assert_eq!(m.schema().to_value(), json!({"multipleOf": 3}));
        assert!(!m.is_instantiable());
        assert_eq!(m.title(), "MultipleOf");

        let names = Modifier::MinLength.apply(2).unwrap();
        assert_eq!(names.title(), "");
    }

    #[test]
    fn list_keywords_wrap_single_arguments() {
        let required = Modifier::Required.apply("name").unwrap();
        assert_eq!(required.schema().to_value(), json!({"required": ["name"]}));
        let choice = Modifier::Enum.apply(vec!["a", "b"]).unwrap();
        assert_eq!(choice.schema().to_value(), json!({"enum": ["a", "b"]}));
        assert!(choice.is_instantiable());
        assert!(!Modifier::Const.apply("a").unwrap().is_instantiable());
        assert!(!Modifier::AnyOf.apply(vec!["a", "b"]).unwrap().is_instantiable());
    }

    #[test]
    fn malformed_arguments_fail_definition() {
        assert!(Modifier::MinLength.apply("three").is_err());
        assert!(Modifier::Pattern.apply("(").is_err());
        assert!(Modifier::AnyOf.apply(Vec::<SchemaArg>::new()).is_err());
    }
}
