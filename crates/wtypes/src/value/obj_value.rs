//! ObjValue - guarded writes to an object instance.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Error, Result};
use crate::schema::{Keyword, SchemaDocument};
use crate::type_def::TypeDescriptor;
use crate::validator::Validator;

/// Mutable view of an object instance.
///
/// Each write is checked twice before it commits: the written members alone
/// (against the member's declared schema, or the relaxed document for
/// undeclared keys), then the whole candidate object against the full
/// document.
pub struct ObjValue<'a> {
    target: TypeDescriptor,
    members: &'a mut Map<String, Value>,
    validator: &'a Validator,
}

impl<'a> ObjValue<'a> {
    pub(crate) fn new(
        target: TypeDescriptor,
        members: &'a mut Map<String, Value>,
        validator: &'a Validator,
    ) -> Self {
        Self {
            target,
            members,
            validator,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.get(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The document a partial write is checked against: the full document
    /// without the clauses that only hold for the whole object.
    fn relaxed(&self) -> SchemaDocument {
        let mut relaxed = self.target.schema().without_required();
        relaxed.remove(Keyword::MinProperties);
        relaxed.remove(Keyword::Dependencies);
        relaxed
    }

    fn check_member(&self, key: &str, value: &Value) -> Result<()> {
        match self.target.schema().property(key) {
            Some(property) => self
                .validator
                .validate_schema_at(value, property, &[key.to_string()]),
            None => {
                let mut single = Map::new();
                single.insert(key.to_string(), value.clone());
                self.validator
                    .validate_document(&Value::Object(single), &self.relaxed())
            }
        }
    }

    fn commit(&mut self, candidate: Map<String, Value>) -> Result<()> {
        let candidate = Value::Object(candidate);
        self.validator.validate(&self.target, &candidate)?;
        if let Value::Object(members) = candidate {
            *self.members = members;
        }
        Ok(())
    }

    /// Writes one member. Returns the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        let key = key.into();
        let mut candidate = self.members.clone();
        let result = self.check_member(&key, &value).and_then(|()| {
            let previous = candidate.insert(key.clone(), value);
            self.commit(candidate).map(|()| previous)
        });
        result.map_err(|err| rejected(&self.target, "set", &key, err))
    }

    /// Writes every entry or none of them.
    pub fn update(&mut self, entries: Map<String, Value>) -> Result<()> {
        self.validator
            .validate_document(&Value::Object(entries.clone()), &self.relaxed())
            .map_err(|err| rejected(&self.target, "update", "", err))?;
        let mut candidate = self.members.clone();
        candidate.extend(entries);
        self.commit(candidate)
            .map_err(|err| rejected(&self.target, "update", "", err))
    }

    /// Removes a member, unless the object would no longer satisfy its type
    /// (a required key, `minProperties`, a dependency).
    pub fn remove(&mut self, key: &str) -> Result<Value> {
        let mut candidate = self.members.clone();
        let removed = candidate
            .shift_remove(key)
            .ok_or_else(|| Error::MissingKey(key.to_string()))?;
        self.commit(candidate)
            .map_err(|err| rejected(&self.target, "remove", key, err))?;
        Ok(removed)
    }
}

fn rejected(ty: &TypeDescriptor, op: &str, key: &str, err: Error) -> Error {
    trace!(type_name = ty.name(), op, key, %err, "guard rejected mutation");
    err
}
