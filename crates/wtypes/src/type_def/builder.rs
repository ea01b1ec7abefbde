//! TypeBuilder - the built-in types.

use serde_json::Value;

use super::descriptor::{TypeDescriptor, TypeFlags};
use super::factory::{Field, TypeFactory};
use super::kind::BaseKind;
use super::module_type::ModuleType;
use crate::error::SchemaDefinitionError;
use crate::schema::{Keyword, SchemaDocument};

/// String types checked by a named format.
const FORMAT_TYPES: &[(&str, &str)] = &[
    ("Datetime", "date-time"),
    ("Date", "date"),
    ("Time", "time"),
    ("Email", "email"),
    ("Idnemail", "idn-email"),
    ("Hostname", "hostname"),
    ("Idnhostname", "idn-hostname"),
    ("Ipv4", "ipv4"),
    ("Ipv6", "ipv6"),
    ("Uri", "uri"),
    ("Urireference", "uri-reference"),
    ("Iri", "iri"),
    ("Irireference", "iri-reference"),
    ("Uritemplate", "uri-template"),
    ("Jsonpointer", "json-pointer"),
    ("Relativejsonpointer", "relative-json-pointer"),
    ("Regex", "regex"),
    ("Color", "color"),
];

/// Factory for the built-in types.
///
/// With a system module attached, records built here are registered in it so
/// forward references can find them.
#[derive(Debug, Clone, Default)]
pub struct TypeBuilder {
    pub system: Option<ModuleType>,
}

#[allow(non_snake_case)]
impl TypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(system: ModuleType) -> Self {
        Self {
            system: Some(system),
        }
    }

    fn builtin(name: &str, kind: BaseKind, schema: SchemaDocument, flags: TypeFlags) -> TypeDescriptor {
        TypeDescriptor::from_parts(name, schema, kind, flags)
    }

    fn simple(name: &str, kind: BaseKind) -> TypeDescriptor {
        let mut schema = SchemaDocument::new();
        if let Some(simple) = kind.simple_type() {
            schema.insert(Keyword::Type, Value::from(simple.as_str()));
        }
        Self::builtin(name, kind, schema, TypeFlags::default())
    }

    // ------------------------------------------------------------------
    // Base types

    /// The empty type: every value is an instance.
    pub fn Trait(&self) -> TypeDescriptor {
        Self::simple("Trait", BaseKind::Composite)
    }

    pub fn Bool(&self) -> TypeDescriptor {
        Self::simple("Bool", BaseKind::Boolean)
    }

    pub fn Null(&self) -> TypeDescriptor {
        Self::simple("Null", BaseKind::Null)
    }

    pub fn Integer(&self) -> TypeDescriptor {
        Self::simple("Integer", BaseKind::Integer)
    }

    pub fn Float(&self) -> TypeDescriptor {
        Self::simple("Float", BaseKind::Number)
    }

    pub fn String(&self) -> TypeDescriptor {
        Self::simple("String", BaseKind::String)
    }

    pub fn Dict(&self) -> TypeDescriptor {
        Self::simple("Dict", BaseKind::Object)
    }

    pub fn List(&self) -> TypeDescriptor {
        Self::simple("List", BaseKind::Array)
    }

    /// An array whose bracket application declares positional items.
    pub fn Tuple(&self) -> TypeDescriptor {
        let schema = SchemaDocument::new().with(Keyword::Type, "array");
        let flags = TypeFlags {
            positional_items: true,
            ..TypeFlags::default()
        };
        Self::builtin("Tuple", BaseKind::Array, schema, flags)
    }

    pub fn Unique(&self) -> TypeDescriptor {
        let schema = SchemaDocument::new()
            .with(Keyword::Type, "array")
            .with(Keyword::UniqueItems, true);
        Self::builtin("Unique", BaseKind::Array, schema, TypeFlags::default())
    }

    // ------------------------------------------------------------------
    // String formats

    fn format_type(&self, name: &str) -> TypeDescriptor {
        let format = FORMAT_TYPES
            .iter()
            .find(|(type_name, _)| *type_name == name)
            .map_or(name, |(_, format)| *format);
        let schema = SchemaDocument::new()
            .with(Keyword::Type, "string")
            .with(Keyword::Format, format);
        Self::builtin(name, BaseKind::String, schema, TypeFlags::default())
    }

    /// All built-in format types, in declaration order.
    pub fn format_types(&self) -> Vec<TypeDescriptor> {
        FORMAT_TYPES
            .iter()
            .map(|(name, _)| self.format_type(name))
            .collect()
    }

    pub fn Datetime(&self) -> TypeDescriptor {
        self.format_type("Datetime")
    }

    pub fn Date(&self) -> TypeDescriptor {
        self.format_type("Date")
    }

    pub fn Time(&self) -> TypeDescriptor {
        self.format_type("Time")
    }

    pub fn Email(&self) -> TypeDescriptor {
        self.format_type("Email")
    }

    pub fn Idnemail(&self) -> TypeDescriptor {
        self.format_type("Idnemail")
    }

    pub fn Hostname(&self) -> TypeDescriptor {
        self.format_type("Hostname")
    }

    pub fn Idnhostname(&self) -> TypeDescriptor {
        self.format_type("Idnhostname")
    }

    pub fn Ipv4(&self) -> TypeDescriptor {
        self.format_type("Ipv4")
    }

    pub fn Ipv6(&self) -> TypeDescriptor {
        self.format_type("Ipv6")
    }

    pub fn Uri(&self) -> TypeDescriptor {
        self.format_type("Uri")
    }

    pub fn Urireference(&self) -> TypeDescriptor {
        self.format_type("Urireference")
    }

    pub fn Iri(&self) -> TypeDescriptor {
        self.format_type("Iri")
    }

    pub fn Irireference(&self) -> TypeDescriptor {
        self.format_type("Irireference")
    }

    pub fn Uritemplate(&self) -> TypeDescriptor {
        self.format_type("Uritemplate")
    }

    pub fn Jsonpointer(&self) -> TypeDescriptor {
        self.format_type("Jsonpointer")
    }

    pub fn Relativejsonpointer(&self) -> TypeDescriptor {
        self.format_type("Relativejsonpointer")
    }

    pub fn Regex(&self) -> TypeDescriptor {
        self.format_type("Regex")
    }

    pub fn Color(&self) -> TypeDescriptor {
        self.format_type("Color")
    }

    // ------------------------------------------------------------------
    // Higher-level helpers

    /// A forward reference to the type registered as `name`, resolved when
    /// a value is validated.
    pub fn forward(&self, name: &str) -> TypeDescriptor {
        let schema = SchemaDocument::new().with(Keyword::Ref, name);
        Self::builtin(name, BaseKind::Composite, schema, TypeFlags::default())
    }

    /// A record type on `Dict`, registered in the system module if any.
    pub fn record(
        &self,
        name: &str,
        fields: Vec<Field>,
    ) -> Result<TypeDescriptor, SchemaDefinitionError> {
        let record = TypeFactory::record(&self.Dict(), name, fields, SchemaDocument::new())?;
        if let Some(system) = &self.system {
            system.register(&record);
        }
        Ok(record)
    }
}
