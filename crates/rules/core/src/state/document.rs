//! Sparse writes back to host documents.
//!
//! Rule code never mutates persisted documents directly. It describes the
//! fields that should change as a [`DocumentUpdate`] and leaves submission to
//! the host adapter.

use std::collections::BTreeMap;

use crate::state::types::{ActorId, ItemId};

/// Dotted field paths understood by the host.
pub mod paths {
    pub const HARDWARE_TONS: &str = "system.hardware.tons";
    pub const HARDWARE_POWER_PER_TON: &str = "system.hardware.powerPerTon";
    pub const COST: &str = "system.cost";
    pub const QUANTITY: &str = "system.quantity";
    pub const HITS_VALUE: &str = "system.hits.value";
    pub const HITS_DAMAGE: &str = "system.hits.damage";
}

/// The document an update is addressed to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "document", rename_all = "snake_case"))]
pub enum DocumentRef {
    Actor { actor: ActorId },
    Item { actor: ActorId, item: ItemId },
}

impl DocumentRef {
    pub const fn actor(actor: ActorId) -> Self {
        Self::Actor { actor }
    }

    pub const fn item(actor: ActorId, item: ItemId) -> Self {
        Self::Item { actor, item }
    }

    /// The actor that owns the addressed document.
    pub fn owner(&self) -> &ActorId {
        match self {
            Self::Actor { actor } | Self::Item { actor, .. } => actor,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Bool(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Number(value) if value.is_finite() => Some(value.trunc() as i64),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A set of field writes against one document.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentUpdate {
    pub target: DocumentRef,
    pub changes: BTreeMap<String, FieldValue>,
}

impl DocumentUpdate {
    pub fn new(target: DocumentRef) -> Self {
        Self {
            target,
            changes: BTreeMap::new(),
        }
    }

    pub fn with(mut self, path: &str, value: impl Into<FieldValue>) -> Self {
        self.set(path, value);
        self
    }

    pub fn set(&mut self, path: &str, value: impl Into<FieldValue>) {
        self.changes.insert(path.to_owned(), value.into());
    }

    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        self.changes.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }
}
