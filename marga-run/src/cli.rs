//! Command-line arguments and their merge into the loaded configuration.

use std::path::PathBuf;

use clap::Parser;
use marga_maze::config::MargaConfig;
use marga_maze::core::GridCoord;
use tracing::warn;

/// Explore a maze file and recover the shortest path
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Maze file (`#`/`.` text grid)
    pub maze: PathBuf,

    /// Configuration file path (configs/marga.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start cell as "x, y"
    #[arg(long)]
    pub start: Option<String>,

    /// Goal cell as "x, y"
    #[arg(long)]
    pub goal: Option<String>,

    /// Write an SVG frame per exploration step
    #[arg(long)]
    pub save_images: bool,

    /// Print wavefront values in each frame cell
    #[arg(long)]
    pub floodfill_display: bool,

    /// Shade frame cells by wavefront value
    #[arg(long)]
    pub heat_map: bool,

    /// Add the straight-line goal distance to the wavefront
    #[arg(long)]
    pub euclidean: bool,

    /// Randomly perturb the wavefront and keep the best attempt
    #[arg(long)]
    pub hope_mode: bool,

    /// Attempts to run in hope mode
    #[arg(long)]
    pub hope_runs: Option<usize>,

    /// Per-cell decay of the perturbation width
    #[arg(long)]
    pub decay: Option<f32>,

    /// Initial perturbation half-width
    #[arg(long)]
    pub factor: Option<f32>,

    /// Seed for reproducible attempts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Abort exploration after this many steps
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Output directory; one sub-directory per run
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse `"x, y"`, tolerating surrounding parentheses and whitespace.
pub fn parse_coord(text: &str) -> Option<GridCoord> {
    let inner = text
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let (x, y) = inner.split_once(',')?;
    Some(GridCoord::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn coord_or_warn(flag: &str, text: &str) -> Option<GridCoord> {
    let coord = parse_coord(text);
    if coord.is_none() {
        warn!("Ignoring malformed --{} {:?}, expected \"x, y\"", flag, text);
    }
    coord
}

impl Args {
    /// Overlay command-line values on a loaded configuration.
    pub fn apply(&self, config: &mut MargaConfig) {
        if let Some(start) = self.start.as_deref().and_then(|s| coord_or_warn("start", s)) {
            config.episode.start = start;
        }
        if let Some(goal) = self.goal.as_deref().and_then(|s| coord_or_warn("goal", s)) {
            config.episode.goal = Some(goal);
        }

        config.render.save_frames |= self.save_images;
        config.render.show_wavefront |= self.floodfill_display;
        config.render.heat_map |= self.heat_map;

        config.bias.euclidean |= self.euclidean;
        config.bias.stochastic |= self.hope_mode;
        if let Some(runs) = self.hope_runs {
            config.bias.attempts = runs;
        }
        if let Some(decay) = self.decay {
            config.bias.decay = decay;
        }
        if let Some(factor) = self.factor {
            config.bias.factor = factor;
        }
        if self.seed.is_some() {
            config.bias.seed = self.seed;
        }
        if self.max_steps.is_some() {
            config.exploration.max_steps = self.max_steps;
        }
        if let Some(output) = &self.output {
            config.output.directory = output.display().to_string();
        }
    }
}
