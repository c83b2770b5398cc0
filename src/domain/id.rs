use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a list or a task (e.g., "0", "c4", "3f9a...")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Source of fresh ids for newly created lists and tasks
pub trait IdGenerator {
    fn generate(&mut self) -> ItemId;
}

/// Random v4 UUIDs in simple (32 hex chars, no hyphens) form.
///
/// The seed dataset uses short ids like `"0"` and `"c4"`, which a 32 character
/// id can never equal.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&mut self) -> ItemId {
        ItemId(Uuid::new_v4().simple().to_string())
    }
}

/// Deterministic ids of the form `{prefix}{counter}`, counting from 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> ItemId {
        let id = ItemId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
