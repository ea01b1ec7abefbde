//! Instance - a value paired with the type it was validated against.

use serde_json::Value;

use super::arr_value::ArrValue;
use super::obj_value::ObjValue;
use crate::error::{Error, Result};
use crate::type_def::TypeDescriptor;
use crate::validator::Validator;

/// A value that satisfied its type when constructed.
///
/// There is no direct mutable access to the value: objects and arrays change
/// only through [`ObjValue`] and [`ArrValue`], which validate every write.
/// Concurrent mutation of one instance must be serialized by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    ty: TypeDescriptor,
    value: Value,
}

impl Instance {
    pub(crate) fn new(ty: TypeDescriptor, value: Value) -> Self {
        Self { ty, value }
    }

    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Object member, if the value is an object holding `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.as_object()?.get(key)
    }

    /// Array item, if the value is an array long enough.
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.value.as_array()?.get(index)
    }

    /// Guarded access to an object value.
    pub fn object_mut<'a>(&'a mut self, validator: &'a Validator) -> Result<ObjValue<'a>> {
        let target = validator.resolve_type(&self.ty)?;
        let Value::Object(members) = &mut self.value else {
            return Err(Error::NotAContainer {
                type_name: self.ty.name().to_string(),
                expected: "objects",
            });
        };
        Ok(ObjValue::new(target, members, validator))
    }

    /// Guarded access to an array value.
    pub fn array_mut<'a>(&'a mut self, validator: &'a Validator) -> Result<ArrValue<'a>> {
        let target = validator.resolve_type(&self.ty)?;
        let Value::Array(items) = &mut self.value else {
            return Err(Error::NotAContainer {
                type_name: self.ty.name().to_string(),
                expected: "arrays",
            });
        };
        Ok(ArrValue::new(target, items, validator))
    }
}

impl PartialEq<Value> for Instance {
    fn eq(&self, other: &Value) -> bool {
        self.value == *other
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        instance.value
    }
}
