//! ArrValue - guarded writes to an array instance.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::schema::Keyword;
use crate::type_def::TypeDescriptor;
use crate::validator::Validator;

/// Mutable view of an array instance.
///
/// Written items are checked against the item schema for their position
/// (positional `items`, then `additionalItems`, or the single `items`
/// schema) and the candidate array against the full document before the
/// write commits. `pop` is optimistic and rolls back instead.
pub struct ArrValue<'a> {
    target: TypeDescriptor,
    items: &'a mut Vec<Value>,
    validator: &'a Validator,
}

impl<'a> ArrValue<'a> {
    pub(crate) fn new(
        target: TypeDescriptor,
        items: &'a mut Vec<Value>,
        validator: &'a Validator,
    ) -> Self {
        Self {
            target,
            items,
            validator,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The schema an item at `index` must satisfy, if any.
    pub fn item_schema(&self, index: usize) -> Option<&Value> {
        let schema = self.target.schema();
        match schema.get(Keyword::Items)? {
            Value::Array(positional) => positional
                .get(index)
                .or_else(|| schema.get(Keyword::AdditionalItems)),
            single => Some(single),
        }
    }

    fn check_item(&self, index: usize, value: &Value) -> Result<()> {
        match self.item_schema(index) {
            Some(schema) => self
                .validator
                .validate_schema_at(value, schema, &[index.to_string()]),
            None => Ok(()),
        }
    }

    fn commit(&mut self, candidate: Vec<Value>) -> Result<()> {
        let candidate = Value::Array(candidate);
        self.validator.validate(&self.target, &candidate)?;
        if let Value::Array(items) = candidate {
            *self.items = items;
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }

    /// Replaces the item at `index`. Returns the replaced item.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        let result = self.check_item(index, &value).and_then(|()| {
            let mut candidate = self.items.clone();
            let previous = std::mem::replace(&mut candidate[index], value);
            self.commit(candidate).map(|()| previous)
        });
        result.map_err(|err| rejected(&self.target, "set", err))
    }

    /// Inserts before `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        let result = self.check_item(index, &value).and_then(|()| {
            let mut candidate = self.items.clone();
            candidate.insert(index, value);
            self.commit(candidate)
        });
        result.map_err(|err| rejected(&self.target, "insert", err))
    }

    pub fn append(&mut self, value: Value) -> Result<()> {
        let index = self.items.len();
        self.insert(index, value)
    }

    /// Appends every value or none of them.
    pub fn extend(&mut self, values: Vec<Value>) -> Result<()> {
        let start = self.items.len();
        let result = values
            .iter()
            .enumerate()
            .try_for_each(|(offset, value)| self.check_item(start + offset, value))
            .and_then(|()| {
                let mut candidate = self.items.clone();
                candidate.extend(values);
                self.commit(candidate)
            });
        result.map_err(|err| rejected(&self.target, "extend", err))
    }

    /// Removes the item at `index`, or the last one. If the shorter array no
    /// longer satisfies the type, the item is put back and the error is
    /// returned.
    pub fn pop(&mut self, index: Option<usize>) -> Result<Value> {
        let len = self.items.len();
        let index = match index {
            Some(index) if index < len => index,
            None if len > 0 => len - 1,
            other => return Err(self.out_of_range(other.unwrap_or(0))),
        };
        let removed = self.items.remove(index);
        let remaining = Value::Array(std::mem::take(self.items));
        let result = self.validator.validate(&self.target, &remaining);
        if let Value::Array(items) = remaining {
            *self.items = items;
        }
        match result {
            Ok(()) => Ok(removed),
            Err(err) => {
                self.items.insert(index, removed);
                debug!(type_name = self.target.name(), index, %err, "pop rolled back");
                Err(err)
            }
        }
    }
}

fn rejected(ty: &TypeDescriptor, op: &str, err: Error) -> Error {
    trace!(type_name = ty.name(), op, %err, "guard rejected mutation");
    err
}
