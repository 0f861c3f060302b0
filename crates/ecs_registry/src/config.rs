//! Registry configuration.

/// Construction-time settings for an [`EntityRegistry`](crate::EntityRegistry).
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Number of entity records to reserve space for up front.
    pub initial_capacity: usize,
}

impl RegistryConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `capacity` entities.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}
