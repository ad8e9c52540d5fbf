//! Maze files, run exports and frame rendering.
//!
//! - **Maze files** (`.mz`): `#`/`.` text grids parsed into a ground-truth
//!   [`MazeTopology`](crate::topology::MazeTopology)
//! - **Exports**: `exploration.csv` trace and `statistics.yaml` summary per run
//! - **SVG frames**: [`SvgFrameRenderer`] observes episodes and writes one
//!   SVG per frame
//!
//! ## Loading a maze
//!
//! ```rust,no_run
//! use marga_maze::io::load_maze;
//! use std::path::Path;
//!
//! let maze = load_maze(Path::new("data/mazes/perfect8.mz"))?;
//! println!("{}x{} maze", maze.width(), maze.height());
//! # Ok::<(), marga_maze::io::MazeFileError>(())
//! ```

pub mod export;
pub mod maze_file;
pub mod svg;

pub use export::{
    ExportError, RunStatistics, TRACE_HEADER, export_run, write_exploration_csv, write_statistics,
};
pub use maze_file::{MazeFileError, load_maze, parse_maze, to_maze_text};
pub use self::svg::{SvgColorScheme, SvgConfig, SvgFrameRenderer, render_frame};
