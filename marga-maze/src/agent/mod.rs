//! Agent pose and local sensing.
//!
//! The agent only ever sees the three walls to its left, front and right.
//! Moving forward through a wall is a contract violation reported as
//! [`MoveError::Blocked`].

mod state;

pub use state::{Agent, MoveError, WallSense};
