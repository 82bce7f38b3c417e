use crate::core::{CodeRecord, NewRecord, Result};
use crate::format::CodeFormat;
use crate::generator::{CodeGenerator, GeneratorConfig};
use crate::storage::CodeStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Single-writer code allocation.
///
/// [`CodeGenerator::generate`](crate::CodeGenerator::generate) followed by
/// a separate insert is a check-then-act pair: two concurrent creations can
/// both pass the uniqueness check with the same candidate and race to the
/// store's constraint. The allocator closes that window by serializing
/// generate-then-insert behind one async mutex, so every `allocate` call
/// observes the previous call's insert.
///
/// The guarantee holds per allocator instance. Processes writing to a
/// shared external store from several allocators still depend on the
/// store's uniqueness constraint.
pub struct SerialAllocator<S: CodeStore + ?Sized> {
    generator: CodeGenerator<S>,
    gate: Mutex<()>,
}

impl<S: CodeStore + ?Sized> SerialAllocator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, GeneratorConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: GeneratorConfig) -> Self {
        Self {
            generator: CodeGenerator::with_config(store, config),
            gate: Mutex::new(()),
        }
    }

    /// Generate a code for the record and insert it, atomically with
    /// respect to other `allocate` calls on this allocator.
    pub async fn allocate(
        &self,
        entity: &str,
        record: NewRecord,
        format: &CodeFormat,
    ) -> Result<CodeRecord> {
        let _guard = self.gate.lock().await;
        self.generator.create(entity, record, format).await
    }

    /// The underlying generator, for unserialized candidate previews.
    pub fn generator(&self) -> &CodeGenerator<S> {
        &self.generator
    }
}
