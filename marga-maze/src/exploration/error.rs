//! Exploration error types.

use thiserror::Error;

use crate::agent::MoveError;
use crate::core::GridCoord;

/// Errors that stop an exploration episode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorationError {
    /// Start cell is not inside the maze.
    #[error("start cell {0} is outside the maze")]
    StartOutOfBounds(GridCoord),

    /// Goal cell is not inside the maze.
    #[error("goal cell {0} is outside the maze")]
    GoalOutOfBounds(GridCoord),

    /// The configured step ceiling was hit before reaching the goal.
    #[error("step limit {limit} reached at {position} without finding the goal")]
    StepLimitExceeded {
        /// Configured ceiling
        limit: usize,
        /// Where the agent stood when the ceiling was hit
        position: GridCoord,
    },

    /// The agent was asked to walk through a wall.
    #[error(transparent)]
    Move(#[from] MoveError),
}

impl ExplorationError {
    /// Get a short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StartOutOfBounds(_) => "START_OUT_OF_BOUNDS",
            Self::GoalOutOfBounds(_) => "GOAL_OUT_OF_BOUNDS",
            Self::StepLimitExceeded { .. } => "STEP_LIMIT",
            Self::Move(_) => "BLOCKED",
        }
    }
}
