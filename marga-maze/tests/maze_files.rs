//! Bundled maze files: parsing, serialization and full episodes.

mod common;

use std::path::PathBuf;

use marga_maze::core::GridCoord;
use marga_maze::episode::{EpisodeConfig, EpisodeRunner};
use marga_maze::exploration::NoopObserver;
use marga_maze::io::{MazeFileError, load_maze, parse_maze, to_maze_text};

use common::{corridor_3x3, corridor_cells, init_logging};

fn maze_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("mazes")
        .join(name)
}

const BUNDLED: [(&str, usize, usize); 5] = [
    ("open2.mz", 2, 2),
    ("corridor3.mz", 3, 3),
    ("perfect6x5.mz", 6, 5),
    ("perfect8.mz", 8, 8),
    ("loopy10.mz", 10, 10),
];

#[test]
fn test_bundled_mazes_load() {
    for (name, width, height) in BUNDLED {
        let maze = load_maze(&maze_path(name)).unwrap();
        assert_eq!((maze.width(), maze.height()), (width, height), "{name}");
    }
}

#[test]
fn test_bundled_mazes_text_round_trip() {
    for (name, _, _) in BUNDLED {
        let maze = load_maze(&maze_path(name)).unwrap();
        let reparsed = parse_maze(&to_maze_text(&maze)).unwrap();
        assert_eq!(reparsed, maze, "{name}");
    }
}

#[test]
fn test_bundled_mazes_solved() {
    init_logging();
    for (name, width, height) in BUNDLED {
        let maze = load_maze(&maze_path(name)).unwrap();
        let runner = EpisodeRunner::new(&maze, EpisodeConfig::default());
        let result = runner.run_best(&mut NoopObserver).unwrap();
        assert!(result.path_found(), "{name}");
        assert_eq!(result.path.first(), Some(&GridCoord::new(0, 0)));
        assert_eq!(
            result.path.last(),
            Some(&GridCoord::new(width as i32 - 1, height as i32 - 1))
        );
        assert!(result.exploration_steps() <= 4 * width * height, "{name}");
    }
}

#[test]
fn test_corridor_file_has_dead_end_branch() {
    let maze = load_maze(&maze_path("corridor3.mz")).unwrap();
    let runner = EpisodeRunner::new(&maze, EpisodeConfig::default());
    let result = runner.run_once(0, &mut NoopObserver).unwrap();
    assert_eq!(
        result.path,
        vec![
            GridCoord::new(0, 0),
            GridCoord::new(0, 1),
            GridCoord::new(1, 1),
            GridCoord::new(2, 1),
            GridCoord::new(2, 2),
        ]
    );
}

#[test]
fn test_fixture_is_single_corridor() {
    let fixture = corridor_3x3();
    let truth = marga_maze::ShortestPathSolver::find_path(
        &fixture,
        GridCoord::new(0, 0),
        GridCoord::new(2, 2),
    );
    assert_eq!(truth.cells, corridor_cells());
}

#[test]
fn test_missing_file() {
    let err = load_maze(&maze_path("does-not-exist.mz")).unwrap_err();
    assert!(matches!(err, MazeFileError::Io(_)));
}
