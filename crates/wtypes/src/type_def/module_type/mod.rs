//! ModuleType - a namespace of named types that forward references resolve
//! against.

use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

use crate::error::UnresolvedReferenceError;
use crate::type_def::TypeDescriptor;

/// Looks up the type behind a forward reference.
///
/// Supplied by the embedding application; the validator calls it whenever a
/// `$ref` is evaluated.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<TypeDescriptor, UnresolvedReferenceError>;
}

/// Resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl TypeResolver for NoResolver {
    fn resolve(&self, name: &str) -> Result<TypeDescriptor, UnresolvedReferenceError> {
        Err(UnresolvedReferenceError {
            name: name.to_string(),
            reason: "no type resolver is configured".to_string(),
        })
    }
}

/// Inner state of a module (alias map, in registration order).
#[derive(Debug, Default)]
pub struct ModuleTypeInner {
    pub aliases: IndexMap<String, TypeDescriptor>,
}

/// A registry of named types.
///
/// Wraps `ModuleTypeInner` in an `Arc<RwLock<>>` so clones share one
/// namespace.
#[derive(Debug, Clone, Default)]
pub struct ModuleType {
    pub inner: Arc<RwLock<ModuleTypeInner>>,
}

impl ModuleType {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, ModuleTypeInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ModuleTypeInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `ty` under its own name, replacing an earlier entry.
    pub fn register(&self, ty: &TypeDescriptor) {
        self.write().aliases.insert(ty.name().to_string(), ty.clone());
    }

    /// Registers `ty` under `id`. If `id` already exists, returns the
    /// existing entry instead.
    pub fn alias(&self, id: impl Into<String>, ty: &TypeDescriptor) -> TypeDescriptor {
        self.write()
            .aliases
            .entry(id.into())
            .or_insert_with(|| ty.clone())
            .clone()
    }

    /// Looks up an alias by ID.
    pub fn unalias(&self, id: &str) -> Result<TypeDescriptor, UnresolvedReferenceError> {
        self.read()
            .aliases
            .get(id)
            .cloned()
            .ok_or_else(|| UnresolvedReferenceError {
                name: id.to_string(),
                reason: "no type with this name is registered".to_string(),
            })
    }

    pub fn has_alias(&self, id: &str) -> bool {
        self.read().aliases.contains_key(id)
    }

    pub fn names(&self) -> Vec<String> {
        self.read().aliases.keys().cloned().collect()
    }

    /// Resolves an alias, following chains of pure forward references.
    pub fn resolve(&self, id: &str) -> Result<TypeDescriptor, UnresolvedReferenceError> {
        let mut seen: Vec<String> = Vec::new();
        let mut current = id.to_string();
        loop {
            if seen.contains(&current) {
                return Err(UnresolvedReferenceError {
                    name: id.to_string(),
                    reason: format!("reference cycle through `{current}`"),
                });
            }
            let entry = self.unalias(&current).map_err(|mut err| {
                if current != id {
                    err.reason = format!("`{id}` leads to `{current}`, which is not registered");
                    err.name = id.to_string();
                }
                err
            })?;
            let Some(next) = entry.forward_target() else {
                trace!(name = id, resolved = entry.name(), "resolved type reference");
                return Ok(entry);
            };
            let next = next.to_string();
            seen.push(std::mem::replace(&mut current, next));
        }
    }
}

impl TypeResolver for ModuleType {
    fn resolve(&self, name: &str) -> Result<TypeDescriptor, UnresolvedReferenceError> {
        ModuleType::resolve(self, name)
    }
}
