//! Wavefront (flood-fill) navigation fields.
//!
//! A [`WavefrontField`] holds, for every cell reachable from a target, its
//! breadth-first layer plus an optional per-cell [`BiasField`] offset. The
//! exploring agent descends this field greedily; it is rebuilt from scratch
//! whenever the mental map gains walls.
//!
//! ## Bias modes
//!
//! | Mode         | Offset per cell                                  |
//! |--------------|--------------------------------------------------|
//! | none         | 0                                                |
//! | Euclidean    | straight-line distance to the goal               |
//! | stochastic   | `2·U(-f, f)` with `f` decaying per cell          |
//!
//! Offsets never change which cells are reached or in which order; they only
//! change the values stored.

mod bias;
mod field;
mod solver;

pub use bias::{BiasError, BiasField, BiasMode, StochasticBias};
pub use field::WavefrontField;
pub use solver::WavefrontSolver;
