//! Full exploration episodes.
//!
//! An episode explores the maze from the start until the goal is reached,
//! seals every cell the agent never stood in, and searches the shortest path
//! across what remains. Under stochastic bias several attempts can be run and
//! the lowest [`episode_score`] kept.

mod config;
mod runner;
mod score;

pub use config::EpisodeConfig;
pub use runner::{EpisodeError, EpisodeResult, EpisodeRunner, FINAL_FRAME_BASE};
pub use score::episode_score;
