//! Run export: exploration trace and statistics.
//!
//! Each run writes into its own directory:
//!
//! ```text
//! <output>/<run_id>/
//!   exploration.csv    Step,x-coordinate,y-coordinate,Actions
//!   statistics.yaml    maze, score, steps, path
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GridCoord;
use crate::episode::EpisodeResult;
use crate::exploration::TraceEntry;

/// Header row of the exploration trace.
pub const TRACE_HEADER: &str = "Step,x-coordinate,y-coordinate,Actions";

/// Errors while exporting a run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Statistics could not be serialized
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Summary written to `statistics.yaml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Run identifier
    pub run_id: String,
    /// Maze file name
    pub maze: String,
    /// Bias mode used
    pub bias: String,
    /// Attempt that produced this result
    pub attempt: usize,
    /// `steps / 4 + path_length`
    pub score: f32,
    /// Exploration steps
    pub exploration_steps: usize,
    /// Final path length in cells
    pub path_length: usize,
    /// Final path, start to goal
    pub path: Vec<GridCoord>,
}

impl RunStatistics {
    /// Collect statistics from an episode result.
    pub fn from_result(
        run_id: impl Into<String>,
        maze: impl Into<String>,
        bias: impl Into<String>,
        result: &EpisodeResult,
    ) -> Self {
        Self {
            run_id: run_id.into(),
            maze: maze.into(),
            bias: bias.into(),
            attempt: result.attempt,
            score: result.score,
            exploration_steps: result.exploration_steps(),
            path_length: result.path_length(),
            path: result.path.clone(),
        }
    }
}

/// Write the exploration trace as CSV.
pub fn write_exploration_csv<W: Write>(writer: &mut W, trace: &[TraceEntry]) -> std::io::Result<()> {
    writeln!(writer, "{}", TRACE_HEADER)?;
    for entry in trace {
        writeln!(
            writer,
            "{},{},{},{}",
            entry.step, entry.position.x, entry.position.y, entry.action
        )?;
    }
    Ok(())
}

/// Write run statistics as YAML.
pub fn write_statistics<W: Write>(writer: &mut W, stats: &RunStatistics) -> Result<(), ExportError> {
    serde_yaml::to_writer(&mut *writer, stats)?;
    writer.flush()?;
    Ok(())
}

/// Export a run into `<output_dir>/<run_id>/`, returning that directory.
pub fn export_run(output_dir: &Path, stats: &RunStatistics, trace: &[TraceEntry]) -> Result<PathBuf, ExportError> {
    let run_dir = output_dir.join(&stats.run_id);
    fs::create_dir_all(&run_dir)?;

    let mut csv = BufWriter::new(File::create(run_dir.join("exploration.csv"))?);
    write_exploration_csv(&mut csv, trace)?;
    csv.flush()?;

    let mut yaml = BufWriter::new(File::create(run_dir.join("statistics.yaml"))?);
    write_statistics(&mut yaml, stats)?;

    info!("[Export] run {} written to {}", stats.run_id, run_dir.display());
    Ok(run_dir)
}
