//! TypeFactory - the only place new type descriptors come from.
//!
//! Every finished document is checked against the meta-schema here; instance
//! validation never re-checks it.

use serde_json::{Map, Value};
use tracing::debug;

use super::descriptor::{TypeDescriptor, TypeFlags};
use super::kind::BaseKind;
use crate::error::SchemaDefinitionError;
use crate::metaschema;
use crate::schema::{Keyword, SchemaDocument};

/// A declared record member.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeDescriptor,
    /// A member with a default is optional; one without is required.
    pub default: Option<Value>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: &TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty: ty.clone(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeFactory;

impl TypeFactory {
    /// Defines a type from scratch: `type` comes from `kind`, then the
    /// overrides are merged in.
    pub fn define_type(
        name: impl Into<String>,
        kind: BaseKind,
        overrides: SchemaDocument,
    ) -> Result<TypeDescriptor, SchemaDefinitionError> {
        let mut schema = SchemaDocument::new();
        if let Some(simple) = kind.simple_type() {
            schema.insert(Keyword::Type, Value::from(simple.as_str()));
        }
        schema.merge(&overrides);
        Self::finish(name.into(), schema, kind, TypeFlags::default())
    }

    /// Derives a type from `base`, inheriting its flags.
    pub fn create(
        base: &TypeDescriptor,
        name: impl Into<String>,
        overrides: SchemaDocument,
    ) -> Result<TypeDescriptor, SchemaDefinitionError> {
        Self::create_with_flags(base, name, overrides, base.flags())
    }

    pub fn create_with_flags(
        base: &TypeDescriptor,
        name: impl Into<String>,
        overrides: SchemaDocument,
        flags: TypeFlags,
    ) -> Result<TypeDescriptor, SchemaDefinitionError> {
        let schema = base.schema().merged(&overrides);
        Self::finish(name.into(), schema, base.kind(), flags)
    }

    /// Derives a record type: each field contributes its type's document as
    /// a property, fields without a default become required.
    pub fn record(
        base: &TypeDescriptor,
        name: impl Into<String>,
        fields: Vec<Field>,
        overrides: SchemaDocument,
    ) -> Result<TypeDescriptor, SchemaDefinitionError> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for field in fields {
            let mut property = field.ty.schema().clone();
            match field.default {
                Some(default) => {
                    property.insert(Keyword::Default, default);
                }
                None => required.push(Value::String(field.name.clone())),
            }
            properties.insert(field.name, property.into());
        }

        let mut declared = SchemaDocument::new().with(Keyword::Properties, properties);
        if !required.is_empty() {
            declared.insert(Keyword::Required, Value::Array(required));
        }
        let mut schema = base.schema().merged(&declared);
        schema.merge(&overrides);
        Self::finish(name.into(), schema, base.kind(), base.flags())
    }

    fn finish(
        name: String,
        schema: SchemaDocument,
        kind: BaseKind,
        flags: TypeFlags,
    ) -> Result<TypeDescriptor, SchemaDefinitionError> {
        if let Err(err) = metaschema::validate_document(&schema) {
            debug!(type_name = %name, pointer = %err.pointer, reason = %err.reason, "type definition rejected");
            return Err(err.for_type(name));
        }
        let kind = infer_kind(&schema, kind);
        debug!(type_name = %name, kind = %kind, "type created");
        Ok(TypeDescriptor::from_parts(name, schema, kind, flags))
    }
}

/// A document declaring exactly one simple type decides the kind.
fn infer_kind(schema: &SchemaDocument, fallback: BaseKind) -> BaseKind {
    match schema.simple_types().as_slice() {
        [single] => BaseKind::from_simple(*single),
        _ => fallback,
    }
}
