//! Collection configuration.

/// Record collection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Number of records to reserve up front (a hint, not a limit)
    pub initial_capacity: usize,
}

impl CollectionConfig {
    /// Returns a copy of this configuration with the given capacity hint.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
