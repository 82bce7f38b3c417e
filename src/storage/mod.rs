pub mod memory;

pub use memory::InMemoryStore;

use crate::core::{CodeRecord, NewRecord, Result};
use async_trait::async_trait;

/// Storage capability consumed by the code generator.
///
/// This is the injectable seam between the generator and whatever actually
/// persists records. Production backends wrap a relational database; tests
/// and embedded use wrap [`InMemoryStore`]. Implementations report I/O
/// failures as [`CodeError::StoreUnavailable`](crate::CodeError) and are
/// never retried by this crate.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// The most recently created record of the entity type, ordered by id
    /// descending, or `None` for an empty table.
    async fn find_most_recent(&self, entity: &str) -> Result<Option<CodeRecord>>;

    /// Whether any record of the entity type already carries this code.
    async fn exists_with_code(&self, entity: &str, code: &str) -> Result<bool>;

    /// Current row count of the entity table.
    async fn count_records(&self, entity: &str) -> Result<u64>;

    /// Insert a record under the given code, assigning id and timestamp.
    ///
    /// Implementations must enforce per-entity code uniqueness and reject
    /// duplicates with [`CodeError::UniqueViolation`](crate::CodeError).
    /// This constraint is the last line of defense when concurrent
    /// creations compute the same candidate code.
    async fn insert(&self, entity: &str, code: &str, record: NewRecord) -> Result<CodeRecord>;
}
