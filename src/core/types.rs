use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted business record that carries a unique human-readable code.
///
/// The `id` is assigned by the store and orders records by creation. The
/// `code` is assigned exactly once at creation time and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeRecord {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub attributes: serde_json::Value,
}

/// Payload for inserting a new record. The code is supplied by the
/// generator, the id and timestamp by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub attributes: serde_json::Value,
}

impl NewRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: serde_json::Value::Null,
        }
    }

    /// Attach free-form attributes to the record
    pub fn attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes = attributes;
        self
    }
}
