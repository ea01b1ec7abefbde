//! Mutation - guarded container operations as data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One guarded operation, applied with [`crate::Validator::mutate`].
///
/// Serialized adjacently tagged, e.g. `{"op": "append", "args": 3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "camelCase")]
pub enum Mutation {
    /// Writes one object member.
    Set { key: String, value: Value },
    /// Writes many object members at once, all or nothing.
    Update(Map<String, Value>),
    Remove(String),
    /// Replaces the array item at `index`.
    SetIndex { index: usize, value: Value },
    Insert { index: usize, value: Value },
    Append(Value),
    Extend(Vec<Value>),
    /// Removes the item at the index, or the last item.
    Pop(Option<usize>),
}

impl Mutation {
    pub fn set(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Set {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_the_tagged_form() {
        let ops: Vec<Mutation> = serde_json::from_value(json!([
            {"op": "set", "args": {"key": "name", "value": "Ada"}},
            {"op": "append", "args": 3},
            {"op": "pop", "args": null},
            {"op": "setIndex", "args": {"index": 0, "value": true}}
        ]))
        .unwrap();
        assert_eq!(ops[0], Mutation::set("name", "Ada"));
        assert_eq!(ops[1], Mutation::Append(json!(3)));
        assert_eq!(ops[2], Mutation::Pop(None));
        assert_eq!(ops[3], Mutation::SetIndex { index: 0, value: json!(true) });
    }
}
