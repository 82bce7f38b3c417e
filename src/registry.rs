use crate::format::CodeFormat;
use std::collections::HashMap;

/// Maps entity kinds to their code formats.
///
/// One format per entity type, registered up front. The defaults cover the
/// three entity families that carry sequential codes: assets and subunits
/// (name-derived prefixes) and payments (fixed `PAY` prefix, count-based
/// numbering).
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: HashMap<String, CodeFormat>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            formats: HashMap::new(),
        }
    }

    /// A registry preloaded with the default entity kinds.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("assets", CodeFormat::asset());
        registry.register("subunits", CodeFormat::subunit());
        registry.register("payments", CodeFormat::payment());
        registry
    }

    /// Register (or replace) the format for an entity kind.
    pub fn register(&mut self, kind: impl Into<String>, format: CodeFormat) {
        self.formats.insert(kind.into(), format);
    }

    pub fn get(&self, kind: &str) -> Option<&CodeFormat> {
        self.formats.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.formats.contains_key(kind)
    }

    /// Registered entity kinds.
    pub fn kinds(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
