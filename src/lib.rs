// ============================================================================
// Seqcode Library
// ============================================================================

pub mod core;
pub mod format;
pub mod storage;
pub mod generator;
mod allocator;
mod registry;

// Re-export main types for convenience
pub use core::{CodeError, CodeRecord, NewRecord, Result};
pub use format::{
    CodeFormat, PrefixSource, SequenceState, SequenceStrategy, derive_prefix, format_code,
    next_sequence,
};
pub use storage::{CodeStore, InMemoryStore};
pub use generator::{CodeGenerator, GeneratorConfig};
pub use allocator::SerialAllocator;
pub use registry::FormatRegistry;

use std::sync::Arc;

// ============================================================================
// High-level service API
// ============================================================================

/// Code assignment service for a set of registered entity kinds.
///
/// This is the recommended entry point for applications: a store, a format
/// registry, and a serialized allocator behind one handle. Creation looks up
/// the entity kind's format, generates the next code, and inserts the record
/// in a single serialized step.
///
/// # Examples
///
/// ```
/// use seqcode::{CodeService, InMemoryStore, NewRecord};
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> seqcode::Result<()> {
/// let service = CodeService::new(Arc::new(InMemoryStore::new()));
///
/// let laptop = service.create("assets", NewRecord::new("Laptop")).await?;
/// assert_eq!(laptop.code, "LAP-001");
///
/// let payment = service.create("payments", NewRecord::new("Invoice 42")).await?;
/// assert_eq!(payment.code, "PAY-000001");
/// # Ok(())
/// # }
/// ```
pub struct CodeService<S: CodeStore + ?Sized> {
    allocator: SerialAllocator<S>,
    registry: FormatRegistry,
}

impl<S: CodeStore + ?Sized> CodeService<S> {
    /// Create a service with the default entity kinds registered.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_registry(store, FormatRegistry::with_defaults())
    }

    /// Create a service with a custom registry.
    pub fn with_registry(store: Arc<S>, registry: FormatRegistry) -> Self {
        Self {
            allocator: SerialAllocator::new(store),
            registry,
        }
    }

    /// Create a service with a custom registry and generator configuration.
    pub fn with_config(store: Arc<S>, registry: FormatRegistry, config: GeneratorConfig) -> Self {
        Self {
            allocator: SerialAllocator::with_config(store, config),
            registry,
        }
    }

    /// Create a record of the given kind, assigning it the next code.
    pub async fn create(&self, kind: &str, record: NewRecord) -> Result<CodeRecord> {
        let format = self.format_for(kind)?;
        self.allocator.allocate(kind, record, format).await
    }

    /// Preview the code the next creation would receive.
    ///
    /// Unserialized and unreserved: the same candidate is returned until a
    /// record is actually inserted.
    pub async fn next_code(&self, kind: &str, name: &str) -> Result<String> {
        let format = self.format_for(kind)?;
        self.allocator.generator().generate(kind, name, format).await
    }

    /// Register (or replace) the format for an entity kind.
    pub fn register(&mut self, kind: impl Into<String>, format: CodeFormat) {
        self.registry.register(kind, format);
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    fn format_for(&self, kind: &str) -> Result<&CodeFormat> {
        self.registry
            .get(kind)
            .ok_or_else(|| CodeError::UnknownKind(kind.to_string()))
    }
}
