//! # Marga-Maze: Grid Maze Exploration Library
//!
//! Simulates an agent that discovers an unknown grid maze through local wall
//! sensing, navigates towards a goal on a continuously re-flooded wavefront
//! and, once there, recovers the shortest path through the cells it walked.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_maze::episode::{EpisodeConfig, EpisodeRunner};
//! use marga_maze::exploration::NoopObserver;
//! use marga_maze::io::parse_maze;
//!
//! let maze = parse_maze(
//!     "#######\n#.....#\n#####.#\n#.....#\n#.#####\n#.....#\n#######\n",
//! )?;
//! let runner = EpisodeRunner::new(&maze, EpisodeConfig::default());
//! let result = runner.run_best(&mut NoopObserver)?;
//! println!(
//!     "steps {}, path {} cells, score {:.2}",
//!     result.exploration_steps(),
//!     result.path_length(),
//!     result.score
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! - Cell `(0, 0)` is the south-west corner
//! - **North** is `y + 1`, **East** is `x + 1`
//! - Neighbors are always enumerated N, E, S, W
//!
//! ## Architecture
//!
//! - [`core`]: Cell coordinates, headings and turns
//! - [`topology`]: Wall storage shared by ground truth and mental map
//! - [`agent`]: Pose, sensing and movement
//! - [`wavefront`]: Flood-fill distance fields and bias fields
//! - [`exploration`]: Sense–flood–move controller and trace
//! - [`pathfinding`]: Dijkstra over the revealed maze
//! - [`episode`]: Exploration + shortest path + score, best-of-N attempts
//! - [`config`]: YAML configuration
//! - [`io`]: Maze files, exports and SVG frames
//!
//! ## Data Flow
//!
//! ```text
//!   maze file ──► MazeTopology (ground truth)
//!                      │ sense
//!                      ▼
//!   Agent ◄── ExplorationController ──► mental map ──► WavefrontSolver
//!                      │ goal reached                       │
//!                      ▼                                    │
//!          seal unvisited cells ◄───────────────────────────┘
//!                      │
//!                      ▼
//!             ShortestPathSolver ──► EpisodeResult (trace, path, score)
//! ```

pub mod agent;
pub mod config;
pub mod core;
pub mod episode;
pub mod exploration;
pub mod io;
pub mod pathfinding;
pub mod topology;
pub mod wavefront;

pub use agent::{Agent, MoveError, WallSense};
pub use config::MargaConfig;
pub use crate::core::{GridCoord, Heading, Turn};
pub use episode::{EpisodeConfig, EpisodeResult, EpisodeRunner, episode_score};
pub use exploration::{ExplorationController, ExplorationError, TraceEntry};
pub use pathfinding::{PathResult, ShortestPathSolver};
pub use topology::{CellWalls, MazeTopology};
pub use wavefront::{BiasField, BiasMode, WavefrontField, WavefrontSolver};
