use super::CodeStore;
use crate::core::{CodeError, CodeRecord, NewRecord, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One entity table: rows in creation order with a monotonic id counter.
#[derive(Default)]
struct Collection {
    next_id: i64,
    rows: Vec<CodeRecord>,
}

/// In-memory store keyed by entity type.
///
/// Collections are created on first use and guarded individually, so
/// lookups for one entity type do not contend with inserts for another.
/// Used by tests and embedded callers, and as the reference implementation
/// of the [`CodeStore`] contract.
pub struct InMemoryStore {
    /// Collections with individual locks; the outer map is only touched
    /// when a new entity type appears.
    collections: RwLock<HashMap<String, Arc<RwLock<Collection>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Get the collection handle for an entity type, if it exists.
    async fn get_collection(&self, entity: &str) -> Option<Arc<RwLock<Collection>>> {
        self.collections.read().await.get(entity).cloned()
    }

    /// Get or create the collection handle for an entity type.
    async fn get_or_create_collection(&self, entity: &str) -> Arc<RwLock<Collection>> {
        let mut collections = self.collections.write().await;
        collections
            .entry(entity.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(Collection::default())))
            .clone()
    }

    /// List entity types seen so far.
    pub async fn entity_types(&self) -> Vec<String> {
        self.collections.read().await.keys().cloned().collect()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeStore for InMemoryStore {
    async fn find_most_recent(&self, entity: &str) -> Result<Option<CodeRecord>> {
        let Some(handle) = self.get_collection(entity).await else {
            return Ok(None);
        };
        let collection = handle.read().await;
        // Rows are appended in id order, so the last one is the newest.
        Ok(collection.rows.last().cloned())
    }

    async fn exists_with_code(&self, entity: &str, code: &str) -> Result<bool> {
        let Some(handle) = self.get_collection(entity).await else {
            return Ok(false);
        };
        let collection = handle.read().await;
        Ok(collection.rows.iter().any(|row| row.code == code))
    }

    async fn count_records(&self, entity: &str) -> Result<u64> {
        let Some(handle) = self.get_collection(entity).await else {
            return Ok(0);
        };
        let collection = handle.read().await;
        Ok(collection.rows.len() as u64)
    }

    async fn insert(&self, entity: &str, code: &str, record: NewRecord) -> Result<CodeRecord> {
        let handle = self.get_or_create_collection(entity).await;
        let mut collection = handle.write().await;

        if collection.rows.iter().any(|row| row.code == code) {
            return Err(CodeError::UniqueViolation {
                entity: entity.to_string(),
                code: code.to_string(),
            });
        }

        collection.next_id += 1;
        let row = CodeRecord {
            id: collection.next_id,
            code: code.to_string(),
            name: record.name,
            created_at: Utc::now(),
            attributes: record.attributes,
        };
        collection.rows.push(row.clone());
        Ok(row)
    }
}
