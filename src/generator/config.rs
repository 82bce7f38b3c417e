/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum number of colliding candidates before generation fails.
    ///
    /// Bounds logical collisions only; store failures are never retried.
    pub max_attempts: u32,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self { max_attempts: 10 }
    }

    /// Set the collision retry bound
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
