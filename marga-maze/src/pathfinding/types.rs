//! Shortest-path result types.

use std::fmt;

use crate::core::GridCoord;

/// Reason for pathfinding failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal is outside the maze
    OutOfBounds,
    /// Goal is not reachable from the start
    NoPath,
    /// Predecessor chain looped during reconstruction
    PredecessorCycle,
}

impl fmt::Display for PathFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathFailure::OutOfBounds => write!(f, "start or goal outside the maze"),
            PathFailure::NoPath => write!(f, "no path exists"),
            PathFailure::PredecessorCycle => write!(f, "predecessor chain contains a cycle"),
        }
    }
}

/// Result of a shortest-path search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Cells from start to goal, both included. Only the start on failure.
    pub cells: Vec<GridCoord>,
    /// Number of cells settled during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result that only holds the start cell
    pub(super) fn failed(start: GridCoord, reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            cells: vec![start],
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells, start included
    pub fn length_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of moves along the path
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}
