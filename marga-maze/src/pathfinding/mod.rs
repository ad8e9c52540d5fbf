//! Shortest paths over a revealed maze.
//!
//! After exploration every unvisited cell of the mental map is sealed, so the
//! search can only route through cells the agent actually walked.

mod dijkstra;
mod types;

pub use dijkstra::ShortestPathSolver;
pub use types::{PathFailure, PathResult};
