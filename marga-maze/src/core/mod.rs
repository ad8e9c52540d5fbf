//! Core types for grid mazes.
//!
//! - [`GridCoord`]: integer cell coordinate (north is `y + 1`)
//! - [`Heading`]: absolute facing in cyclic N, E, S, W order
//! - [`Turn`]: 90° rotation command

mod coord;
mod heading;

pub use coord::GridCoord;
pub use heading::{Heading, Turn};
