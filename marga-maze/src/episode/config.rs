//! Episode configuration.

use crate::core::GridCoord;
use crate::exploration::ExplorationConfig;
use crate::wavefront::BiasMode;

/// Episode configuration.
#[derive(Clone, Debug)]
pub struct EpisodeConfig {
    /// Start cell
    pub start: GridCoord,
    /// Goal cell (`None` = north-east corner)
    pub goal: Option<GridCoord>,
    /// Wavefront bias
    pub bias: BiasMode,
    /// Episodes to run when the bias is stochastic
    pub attempts: usize,
    /// Base seed for stochastic attempts; attempt `i` uses `seed + i`
    pub seed: Option<u64>,
    /// Controller settings
    pub exploration: ExplorationConfig,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            start: GridCoord::new(0, 0),
            goal: None,
            bias: BiasMode::None,
            attempts: 1,
            seed: None,
            exploration: ExplorationConfig::default(),
        }
    }
}

impl EpisodeConfig {
    /// Create with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start cell
    pub fn with_start(mut self, start: GridCoord) -> Self {
        self.start = start;
        self
    }

    /// Set the goal cell
    pub fn with_goal(mut self, goal: GridCoord) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Set the wavefront bias
    pub fn with_bias(mut self, bias: BiasMode) -> Self {
        self.bias = bias;
        self
    }

    /// Set the number of stochastic attempts
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Make stochastic attempts reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the controller settings
    pub fn with_exploration(mut self, exploration: ExplorationConfig) -> Self {
        self.exploration = exploration;
        self
    }

    /// Number of episodes [`super::EpisodeRunner::run_best`] will run.
    pub fn effective_attempts(&self) -> usize {
        if self.bias.is_stochastic() {
            self.attempts.max(1)
        } else {
            1
        }
    }
}
