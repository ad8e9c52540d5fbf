//! Maze wall storage.
//!
//! [`MazeTopology`] is used both for the ground-truth maze and for the
//! agent's incrementally built mental map. Per-cell wall flags are the
//! authoritative store; edge-set views are derived on demand.

mod maze;
mod walls;

pub use maze::MazeTopology;
pub use walls::CellWalls;
