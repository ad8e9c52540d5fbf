//! Online maze exploration.
//!
//! The [`ExplorationController`] drives an [`Agent`](crate::agent::Agent)
//! through a ground-truth maze it cannot see, one step at a time:
//!
//! 1. Sense the left, front and right walls
//! 2. Record them in the mental map
//! 3. Re-flood the wavefront from the goal if anything was learned
//! 4. Turn towards the open neighbor with the lowest wavefront value
//! 5. Step forward and append a [`TraceEntry`]
//!
//! Frames can be observed through [`ExplorationObserver`] for rendering.

mod config;
mod controller;
mod error;
mod observer;
mod trace;
mod visited;

pub use config::ExplorationConfig;
pub use controller::{ExplorationController, ExplorationOutcome, ExplorationState, ExplorationStep};
pub use error::ExplorationError;
pub use observer::{ExplorationObserver, Frame, NoopObserver};
pub use trace::{TraceEntry, compose_action};
pub use visited::VisitedSet;
