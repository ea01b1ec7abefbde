use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::kind::BaseKind;
use crate::schema::{Keyword, SchemaDocument};

/// Behaviour flags carried by a type and inherited by types derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeFlags {
    /// The type contributes no name when added onto another type.
    pub suppress_title: bool,
    /// The type only exists to be composed; constructing it is an error.
    pub no_instantiate: bool,
    /// Bracket application with a list declares positional items.
    pub positional_items: bool,
}

struct TypeInner {
    name: String,
    schema: SchemaDocument,
    kind: BaseKind,
    flags: TypeFlags,
}

/// A named, immutable type definition.
///
/// Cloning is cheap. Descriptors are only produced by [`TypeFactory`] (and
/// the built-ins of [`TypeBuilder`]), so every descriptor's document has
/// passed the meta-schema.
///
/// [`TypeFactory`]: super::TypeFactory
/// [`TypeBuilder`]: super::TypeBuilder
#[derive(Clone)]
pub struct TypeDescriptor {
    inner: Arc<TypeInner>,
}

impl TypeDescriptor {
    pub(crate) fn from_parts(
        name: impl Into<String>,
        schema: SchemaDocument,
        kind: BaseKind,
        flags: TypeFlags,
    ) -> Self {
        Self {
            inner: Arc::new(TypeInner {
                name: name.into(),
                schema,
                kind,
                flags,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn schema(&self) -> &SchemaDocument {
        &self.inner.schema
    }

    pub fn kind(&self) -> BaseKind {
        self.inner.kind
    }

    pub fn flags(&self) -> TypeFlags {
        self.inner.flags
    }

    pub fn is_instantiable(&self) -> bool {
        !self.inner.flags.no_instantiate
    }

    /// The name contributed when this type is added onto another: empty for
    /// title-suppressing types, else the document title or the type name.
    pub fn title(&self) -> &str {
        if self.inner.flags.suppress_title {
            return "";
        }
        self.inner.schema.title().unwrap_or(&self.inner.name)
    }

    /// The referenced name when this type is a pure forward reference.
    pub fn forward_target(&self) -> Option<&str> {
        let schema = &self.inner.schema;
        if schema.len() != 1 {
            return None;
        }
        schema.get(Keyword::Ref).and_then(Value::as_str)
    }

    /// Whether both handles point at the same definition.
    pub fn ptr_eq(&self, other: &TypeDescriptor) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.inner.name == other.inner.name
                && self.inner.kind == other.inner.kind
                && self.inner.flags == other.inner.flags
                && self.inner.schema == other.inner.schema)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.inner.name)
            .field("kind", &self.inner.kind)
            .field("schema", &self.inner.schema)
            .field("flags", &self.inner.flags)
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}
