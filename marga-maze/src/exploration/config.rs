//! Exploration configuration.

/// Exploration controller configuration.
#[derive(Clone, Debug, Default)]
pub struct ExplorationConfig {
    /// Abort once this many trace entries have been recorded.
    ///
    /// `None` runs until the goal is reached.
    pub max_steps: Option<usize>,
}

impl ExplorationConfig {
    /// Create with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step ceiling
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}
