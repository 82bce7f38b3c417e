pub mod config;

pub use config::GeneratorConfig;

use crate::core::{CodeError, CodeRecord, NewRecord, Result};
use crate::format::{
    CodeFormat, PrefixSource, SequenceState, SequenceStrategy, derive_prefix, format_code,
};
use crate::storage::CodeStore;
use std::sync::Arc;
use tracing::{Level, event};

/// Produces unique human-readable codes for records of an entity type.
///
/// The sequence position is reconstructed from the store on every attempt:
/// either the trailing digits of the newest code, or the row count,
/// depending on the format's strategy. A candidate that collides with an
/// existing code triggers a bounded retry; a store whose state does not
/// change between attempts re-derives the same candidate, so exhaustion is
/// reported after `max_attempts` rather than looping forever.
///
/// Generation alone holds no lock: two concurrent calls over the same store
/// state return the same candidate. Route creation through
/// [`SerialAllocator`](crate::SerialAllocator) or rely on the store's
/// insert-time uniqueness constraint to resolve that race.
///
/// # Examples
///
/// ```
/// use seqcode::{CodeFormat, CodeGenerator, InMemoryStore};
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> seqcode::Result<()> {
/// let store = Arc::new(InMemoryStore::new());
/// let generator = CodeGenerator::new(store);
///
/// let code = generator.generate("assets", "Laptop", &CodeFormat::asset()).await?;
/// assert_eq!(code, "LAP-001");
/// # Ok(())
/// # }
/// ```
pub struct CodeGenerator<S: CodeStore + ?Sized> {
    store: Arc<S>,
    config: GeneratorConfig,
}

impl<S: CodeStore + ?Sized> CodeGenerator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, GeneratorConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: GeneratorConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Generate a unique code for a record of `entity` named `name`.
    ///
    /// The returned code is unique among the entity's records at the moment
    /// of the check; the caller is expected to insert promptly. Fails with
    /// [`CodeError::Exhausted`] after `max_attempts` consecutive collisions
    /// and with [`CodeError::EmptyName`] when a name-derived prefix is
    /// requested for a blank name.
    pub async fn generate(&self, entity: &str, name: &str, format: &CodeFormat) -> Result<String> {
        let prefix = match format.prefix_source() {
            PrefixSource::FromName => derive_prefix(name)?,
            PrefixSource::Fixed(prefix) => prefix.clone(),
        };

        let mut attempts = 0u32;
        loop {
            let state = self.load_state(entity, format.sequence_strategy()).await?;
            let candidate = format_code(
                &prefix,
                format.separator_str(),
                state.next(),
                format.pad_width(),
            );

            if !self.store.exists_with_code(entity, &candidate).await? {
                event!(Level::DEBUG, entity, code = %candidate, attempts, "code assigned");
                return Ok(candidate);
            }

            attempts += 1;
            if attempts >= self.config.max_attempts {
                event!(Level::WARN, entity, attempts, "code generation exhausted");
                return Err(CodeError::Exhausted {
                    entity: entity.to_string(),
                    attempts,
                });
            }
            event!(Level::DEBUG, entity, code = %candidate, attempt = attempts, "code collision, regenerating");
        }
    }

    /// Generate a code and insert the record under it, the way an
    /// entity-creation handler does. Nothing is persisted when generation
    /// fails.
    pub async fn create(
        &self,
        entity: &str,
        record: NewRecord,
        format: &CodeFormat,
    ) -> Result<CodeRecord> {
        let code = self.generate(entity, &record.name, format).await?;
        self.store.insert(entity, &code, record).await
    }

    /// Rebuild the sequence position from the store.
    async fn load_state(&self, entity: &str, strategy: SequenceStrategy) -> Result<SequenceState> {
        match strategy {
            SequenceStrategy::SuffixIncrement => {
                let last = self.store.find_most_recent(entity).await?;
                Ok(last.map_or(SequenceState::Empty, |row| SequenceState::LastCode(row.code)))
            }
            SequenceStrategy::RowCount => {
                let count = self.store.count_records(entity).await?;
                Ok(SequenceState::Count(count))
            }
        }
    }
}
