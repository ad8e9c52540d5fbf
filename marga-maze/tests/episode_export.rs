//! Run export and frame rendering on disk.

mod common;

use std::fs;

use marga_maze::config::MargaConfig;
use marga_maze::episode::{EpisodeConfig, EpisodeRunner, FINAL_FRAME_BASE};
use marga_maze::io::{RunStatistics, SvgConfig, SvgFrameRenderer, TRACE_HEADER, export_run};
use tempfile::TempDir;

use common::{corridor_3x3, init_logging};

#[test]
fn test_export_run_writes_trace_and_statistics() {
    init_logging();
    let maze = corridor_3x3();
    let runner = EpisodeRunner::new(&maze, EpisodeConfig::default());
    let result = runner.run_best(&mut marga_maze::exploration::NoopObserver).unwrap();

    let dir = TempDir::new().unwrap();
    let stats = RunStatistics::from_result("corridor_test", "corridor", "none", &result);
    let run_dir = export_run(dir.path(), &stats, &result.trace).unwrap();
    assert_eq!(run_dir, dir.path().join("corridor_test"));

    let csv = fs::read_to_string(run_dir.join("exploration.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], TRACE_HEADER);
    assert_eq!(lines.len(), result.exploration_steps() + 1);
    assert_eq!(lines[1], "1,0,0,RF");
    assert_eq!(lines[8], "8,1,2,F");

    let yaml = fs::read_to_string(run_dir.join("statistics.yaml")).unwrap();
    let loaded: RunStatistics = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(loaded, stats);
    assert_eq!(loaded.path_length, 9);
    assert_eq!(loaded.exploration_steps, 8);
}

#[test]
fn test_svg_frames_written_per_step() {
    let maze = corridor_3x3();
    let dir = TempDir::new().unwrap();
    let frames_dir = dir.path().join("frames");
    let mut renderer = SvgFrameRenderer::new(
        &frames_dir,
        SvgConfig::default().with_wavefront(true).with_heat_map(true),
    );

    let runner = EpisodeRunner::new(&maze, EpisodeConfig::default());
    let result = runner.run_once(0, &mut renderer).unwrap();

    assert_eq!(renderer.failures(), 0);
    assert_eq!(renderer.frames_written(), result.exploration_steps() + 3);
    for index in 1..=result.exploration_steps() {
        assert!(frames_dir.join(format!("{index}.svg")).exists());
    }
    for offset in 0..3 {
        let path = frames_dir.join(format!("{}.svg", FINAL_FRAME_BASE + offset));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"));
    }
}

#[test]
fn test_config_file_drives_episode() {
    let yaml = r#"
episode:
  start: { x: 0, y: 0 }
  goal: { x: 2, y: 2 }
bias:
  euclidean: true
exploration:
  max_steps: 36
render:
  cell_size: 24.0
"#;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("marga.yaml");
    fs::write(&path, yaml).unwrap();

    let config = MargaConfig::load(&path).unwrap();
    assert_eq!(config.bias_mode().name(), "euclidean");
    let maze = corridor_3x3();
    let runner = EpisodeRunner::new(&maze, config.episode_config());
    let result = runner.run_best(&mut marga_maze::exploration::NoopObserver).unwrap();
    assert_eq!(result.path_length(), 9);
}
