//! Observable objects and directional links between their members.
//!
//! Changes travel as messages: an [`Observable`] publishes a [`Change`] on
//! every write that alters a member, and a [`Link`] carries the changes of
//! one member into a member of another observable when pumped. Writes that
//! leave a member unchanged publish nothing, so a pair of links pumped back
//! and forth settles.

use serde_json::{Map, Value};
use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::trace;

use wtypes_util::deep_equal;

use crate::error::Result;
use crate::validator::Validator;
use crate::value::Instance;

/// A member write that changed the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub name: String,
    /// `None` when the member did not exist before.
    pub old: Option<Value>,
    pub new: Value,
}

type Callback = Box<dyn FnMut(&Change) + Send>;

/// An object instance that reports its changes.
pub struct Observable {
    instance: Instance,
    subscribers: Vec<(Option<String>, Sender<Change>)>,
    observers: Vec<(String, Callback)>,
}

impl fmt::Debug for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("instance", &self.instance)
            .field("subscribers", &self.subscribers.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Observable {
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            subscribers: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn into_instance(self) -> Instance {
        self.instance
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.instance.get(key)
    }

    fn change_for(&self, key: &str, value: &Value) -> Option<Change> {
        let old = self.instance.get(key);
        if old.is_some_and(|old| deep_equal(old, value)) {
            return None;
        }
        Some(Change {
            name: key.to_string(),
            old: old.cloned(),
            new: value.clone(),
        })
    }

    /// Guarded member write; publishes a change if the value differs.
    pub fn set(&mut self, validator: &Validator, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        let Some(change) = self.change_for(&key, &value) else {
            return Ok(());
        };
        self.instance.object_mut(validator)?.set(key, value)?;
        self.publish(change);
        Ok(())
    }

    /// Guarded bulk write; publishes one change per altered member.
    pub fn update(&mut self, validator: &Validator, entries: Map<String, Value>) -> Result<()> {
        let changes: Vec<Change> = entries
            .iter()
            .filter_map(|(key, value)| self.change_for(key, value))
            .collect();
        self.instance.object_mut(validator)?.update(entries)?;
        for change in changes {
            self.publish(change);
        }
        Ok(())
    }

    /// Receives the changes of `key`, or of every member.
    pub fn subscribe(&mut self, key: Option<&str>) -> Receiver<Change> {
        let (tx, rx) = channel();
        self.subscribers.push((key.map(str::to_string), tx));
        rx
    }

    /// Calls `callback` synchronously on each change of `key`.
    pub fn observe(&mut self, key: impl Into<String>, callback: impl FnMut(&Change) + Send + 'static) {
        self.observers.push((key.into(), Box::new(callback)));
    }

    /// A link carrying changes of `source_key` into `target_key` of whatever
    /// observable it is pumped into.
    pub fn dlink(&mut self, source_key: &str, target_key: impl Into<String>) -> Link {
        Link {
            source_key: source_key.to_string(),
            target_key: target_key.into(),
            changes: self.subscribe(Some(source_key)),
        }
    }

    fn publish(&mut self, change: Change) {
        trace!(name = %change.name, "publishing change");
        for (key, callback) in &mut self.observers {
            if *key == change.name {
                callback(&change);
            }
        }
        // Dropped receivers unsubscribe.
        self.subscribers.retain(|(key, tx)| match key {
            Some(key) if *key != change.name => true,
            _ => tx.send(change.clone()).is_ok(),
        });
    }
}

/// One direction of a member link.
#[derive(Debug)]
pub struct Link {
    source_key: String,
    target_key: String,
    changes: Receiver<Change>,
}

impl Link {
    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    pub fn target_key(&self) -> &str {
        &self.target_key
    }

    /// Applies the pending changes to `target` through its guard. Stops at
    /// the first rejected write; that change is consumed. Returns the number
    /// of changes applied.
    pub fn pump(&self, validator: &Validator, target: &mut Observable) -> Result<usize> {
        let mut applied = 0;
        while let Ok(change) = self.changes.try_recv() {
            trace!(from = %self.source_key, to = %self.target_key, "propagating change");
            target.set(validator, self.target_key.as_str(), change.new)?;
            applied += 1;
        }
        Ok(applied)
    }
}

/// Links `a_key` of `a` and `b_key` of `b` both ways. The first link carries
/// changes from `a` to `b`, the second from `b` to `a`.
pub fn link(a: &mut Observable, a_key: &str, b: &mut Observable, b_key: &str) -> (Link, Link) {
    (a.dlink(a_key, b_key), b.dlink(b_key, a_key))
}
