//! marga-run - Maze exploration runner
//!
//! Loads a maze file, lets the agent explore it from the start cell to the
//! goal, recovers the shortest path through the visited cells and exports
//! the trace and statistics of the best attempt.
//!
//! ```bash
//! marga-run data/mazes/perfect8.mz
//! marga-run data/mazes/loopy10.mz --hope-mode --hope-runs 20 --seed 7 --save-images
//! ```

mod cli;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use cli::Args;
use error::Result;
use marga_maze::config::MargaConfig;
use marga_maze::episode::EpisodeRunner;
use marga_maze::exploration::{ExplorationObserver, NoopObserver};
use marga_maze::io::{RunStatistics, SvgFrameRenderer, export_run, load_maze};
use tracing::{error, info, warn};
use uuid::Uuid;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_run=info".parse().unwrap())
                .add_directive("marga_maze=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<MargaConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MargaConfig::load(path)?
        }
        None => MargaConfig::load_default()?,
    };
    args.apply(&mut config);
    Ok(config)
}

fn maze_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "maze".to_string())
}

fn run(args: &Args) -> Result<()> {
    info!("marga-run v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config(args)?;

    let maze = load_maze(&args.maze)?;
    let stem = maze_stem(&args.maze);
    let run_id = format!("{}_{}", stem, Uuid::new_v4());
    let output_dir = PathBuf::from(&config.output.directory);
    info!(
        "Maze {} ({}x{}), run {}",
        args.maze.display(),
        maze.width(),
        maze.height(),
        run_id
    );

    let episode = config.episode_config();
    let bias = episode.bias.name();
    let runner = EpisodeRunner::new(&maze, episode);
    info!(
        "Start {} goal {} bias {} attempts {}",
        runner.config().start,
        runner.goal(),
        bias,
        runner.config().effective_attempts()
    );

    let mut renderer = config
        .render
        .save_frames
        .then(|| SvgFrameRenderer::new(output_dir.join(&run_id).join("frames"), config.svg_config()));
    let mut noop = NoopObserver;
    let observer: &mut dyn ExplorationObserver = match renderer.as_mut() {
        Some(r) => r,
        None => &mut noop,
    };

    let result = runner.run_best(observer)?;

    if let Some(r) = &renderer {
        info!("Saved {} frames to {}", r.frames_written(), r.output_dir().display());
        if r.failures() > 0 {
            warn!("{} frames could not be saved", r.failures());
        }
    }
    if !result.path_found() {
        warn!(
            "No path from {} to {} on the explored map",
            result.start, result.goal
        );
    }

    info!("Exploration steps: {}", result.exploration_steps());
    info!("Path length: {} cells", result.path_length());
    info!("Score: {:.2} (attempt #{})", result.score, result.attempt);

    let stats = RunStatistics::from_result(&run_id, stem, bias, &result);
    let run_dir = export_run(&output_dir, &stats, &result.trace)?;
    info!("Results written to {}", run_dir.display());
    Ok(())
}
