//! Error types for marga-run

use marga_maze::config::ConfigLoadError;
use marga_maze::episode::EpisodeError;
use marga_maze::io::{ExportError, MazeFileError};
use thiserror::Error;

/// marga-run error type
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Maze file error: {0}")]
    Maze(#[from] MazeFileError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Episode failed: {0}")]
    Episode(#[from] EpisodeError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, RunError>;
