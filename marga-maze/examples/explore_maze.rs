//! Explore a maze file and print the trace, final path and score.
//!
//! Usage:
//!   cargo run --example explore_maze -- <maze.mz>
//!   cargo run --example explore_maze -- <maze.mz> --euclidean
//!   cargo run --example explore_maze -- <maze.mz> --hope <attempts>

use marga_maze::episode::{EpisodeConfig, EpisodeRunner};
use marga_maze::exploration::NoopObserver;
use marga_maze::io::{load_maze, to_maze_text};
use marga_maze::wavefront::{BiasMode, StochasticBias};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <maze.mz> [--euclidean | --hope <attempts>]", args[0]);
        std::process::exit(1);
    }

    let maze = load_maze(Path::new(&args[1])).expect("Failed to load maze");
    let mut config = EpisodeConfig::new();
    match args.get(2).map(|s| s.as_str()) {
        Some("--euclidean") => config = config.with_bias(BiasMode::Euclidean),
        Some("--hope") => {
            let attempts = args
                .get(3)
                .and_then(|s| s.parse().ok())
                .unwrap_or(10);
            config = config
                .with_bias(BiasMode::Stochastic(StochasticBias::default()))
                .with_attempts(attempts);
        }
        _ => {}
    }

    println!("{}", to_maze_text(&maze));

    let runner = EpisodeRunner::new(&maze, config);
    let result = runner
        .run_best(&mut NoopObserver)
        .expect("Episode failed");

    println!("{:>5}  {:>8}  ACTION", "STEP", "CELL");
    for entry in &result.trace {
        println!("{:>5}  {:>8}  {}", entry.step, entry.position.to_string(), entry.action);
    }

    let path: Vec<String> = result.path.iter().map(|c| c.to_string()).collect();
    println!();
    println!("Path ({} cells): {}", result.path_length(), path.join(" "));
    println!(
        "Score: {:.2} ({} steps / 4 + {} cells), attempt #{}",
        result.score,
        result.exploration_steps(),
        result.path_length(),
        result.attempt
    );
}
