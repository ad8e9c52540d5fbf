//! SVG frame rendering.
//!
//! Renders a [`Frame`] of an episode: the walls of its topology, the goal,
//! highlighted cells, the agent with its heading and, optionally, the
//! wavefront values as labels and/or a heat map.

use std::path::{Path, PathBuf};

use log::{trace, warn};
use svg::Document;
use svg::node::element::{Group, Line, Polygon, Rectangle, Text};

use crate::core::{GridCoord, Heading};
use crate::exploration::{ExplorationObserver, Frame};

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Background
    pub background: &'static str,
    /// Horizontal wall segments
    pub horizontal_wall: &'static str,
    /// Vertical wall segments
    pub vertical_wall: &'static str,
    /// Highlighted cells (visited, path)
    pub highlight: &'static str,
    /// Goal cell
    pub goal: &'static str,
    /// Agent cell and heading marker
    pub agent: &'static str,
    /// Labels
    pub text: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            background: "#FFFFFF",
            horizontal_wall: "#D62728",
            vertical_wall: "#2CA02C",
            highlight: "#F7B6D2",
            goal: "#FFD700",
            agent: "#1F77B4",
            text: "#333333",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per cell
    pub cell_size: f32,
    /// Padding around the maze in pixels (holds the axis labels)
    pub padding: f32,
    /// Wall stroke width
    pub wall_width: f32,
    /// Print wavefront values in each cell
    pub show_wavefront: bool,
    /// Shade cells by wavefront value
    pub heat_map: bool,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            padding: 30.0,
            wall_width: 3.0,
            show_wavefront: false,
            heat_map: false,
            colors: SvgColorScheme::default(),
        }
    }
}

impl SvgConfig {
    /// Enable wavefront labels
    pub fn with_wavefront(mut self, enabled: bool) -> Self {
        self.show_wavefront = enabled;
        self
    }

    /// Enable the heat map
    pub fn with_heat_map(mut self, enabled: bool) -> Self {
        self.heat_map = enabled;
        self
    }

    /// Set pixels per cell
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }
}

/// Blue (low) to red (high) ramp for the heat map.
fn heat_color(t: f32) -> String {
    let t = t.clamp(0.0, 1.0);
    let r = (59.0 + t * (180.0 - 59.0)) as u8;
    let g = (76.0 + (1.0 - (2.0 * t - 1.0).abs()) * (221.0 - 76.0)) as u8;
    let b = (192.0 + t * (38.0 - 192.0)) as u8;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

struct Canvas<'c> {
    config: &'c SvgConfig,
    height: usize,
}

impl Canvas<'_> {
    /// Top-left pixel of a cell (y axis flipped so north is up)
    fn cell_origin(&self, cell: GridCoord) -> (f32, f32) {
        let cs = self.config.cell_size;
        (
            self.config.padding + cell.x as f32 * cs,
            self.config.padding + (self.height as i32 - 1 - cell.y) as f32 * cs,
        )
    }

    fn fill_cell(&self, cell: GridCoord, color: &str) -> Rectangle {
        let (x, y) = self.cell_origin(cell);
        Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", self.config.cell_size)
            .set("height", self.config.cell_size)
            .set("fill", color.to_string())
    }

    fn cell_text(&self, cell: GridCoord, label: String) -> Text {
        let (x, y) = self.cell_origin(cell);
        let cs = self.config.cell_size;
        Text::new(label)
            .set("x", x + cs / 2.0)
            .set("y", y + cs / 2.0)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "monospace")
            .set("font-size", cs * 0.3)
            .set("fill", self.config.colors.text)
    }

    fn heading_marker(&self, cell: GridCoord, heading: Heading) -> Polygon {
        let (x, y) = self.cell_origin(cell);
        let cs = self.config.cell_size;
        let (cx, cy) = (x + cs / 2.0, y + cs / 2.0);
        let r = cs * 0.3;
        // Screen y grows downwards
        let (dx, dy) = match heading {
            Heading::North => (0.0, -1.0),
            Heading::East => (1.0, 0.0),
            Heading::South => (0.0, 1.0),
            Heading::West => (-1.0, 0.0),
        };
        let tip = (cx + dx * r, cy + dy * r);
        let left = (cx - dx * r * 0.6 + dy * r * 0.6, cy - dy * r * 0.6 - dx * r * 0.6);
        let right = (cx - dx * r * 0.6 - dy * r * 0.6, cy - dy * r * 0.6 + dx * r * 0.6);
        Polygon::new()
            .set(
                "points",
                format!(
                    "{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
                    tip.0, tip.1, left.0, left.1, right.0, right.1
                ),
            )
            .set("fill", "#FFFFFF")
    }
}

/// Render a frame to an SVG document.
pub fn render_frame(frame: &Frame<'_>, config: &SvgConfig) -> Document {
    let topology = frame.topology;
    let (width, height) = (topology.width(), topology.height());
    let cs = config.cell_size;
    let pad = config.padding;
    let canvas = Canvas { config, height };

    let doc_width = width as f32 * cs + 2.0 * pad;
    let doc_height = height as f32 * cs + 2.0 * pad;

    let mut doc = Document::new()
        .set("width", doc_width)
        .set("height", doc_height)
        .set("viewBox", (0.0, 0.0, doc_width, doc_height))
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", doc_width)
                .set("height", doc_height)
                .set("fill", config.colors.background),
        );

    // Layer 1: cell fills
    let mut cells = Group::new().set("id", "cells");
    if config.heat_map {
        if let Some(field) = frame.wavefront {
            let max = field.max_value().unwrap_or(0.0).max(f32::EPSILON);
            for cell in topology.cells() {
                if let Some(value) = field.get(cell) {
                    cells = cells.add(canvas.fill_cell(cell, &heat_color(value / max)));
                }
            }
        }
    }
    for cell in frame.highlight {
        cells = cells.add(canvas.fill_cell(*cell, config.colors.highlight));
    }
    cells = cells.add(canvas.fill_cell(frame.goal, config.colors.goal));
    if let Some(agent) = frame.agent {
        cells = cells.add(canvas.fill_cell(agent.position(), config.colors.agent));
    }
    doc = doc.add(cells);

    // Layer 2: walls
    let mut walls = Group::new()
        .set("id", "walls")
        .set("stroke-width", config.wall_width)
        .set("stroke-linecap", "square");
    for seg in topology.horizontal_walls() {
        let y = pad + (height as i32 - seg.y) as f32 * cs;
        let x = pad + seg.x as f32 * cs;
        walls = walls.add(
            Line::new()
                .set("x1", x)
                .set("y1", y)
                .set("x2", x + cs)
                .set("y2", y)
                .set("stroke", config.colors.horizontal_wall),
        );
    }
    for seg in topology.vertical_walls() {
        let x = pad + seg.x as f32 * cs;
        let y = pad + (height as i32 - seg.y) as f32 * cs;
        walls = walls.add(
            Line::new()
                .set("x1", x)
                .set("y1", y)
                .set("x2", x)
                .set("y2", y - cs)
                .set("stroke", config.colors.vertical_wall),
        );
    }
    doc = doc.add(walls);

    // Layer 3: annotations
    let mut labels = Group::new().set("id", "labels");
    if config.show_wavefront {
        if let Some(field) = frame.wavefront {
            for cell in topology.cells() {
                if let Some(value) = field.get(cell) {
                    labels = labels.add(canvas.cell_text(cell, format!("{:.1}", value)));
                }
            }
        }
    }
    if let Some(agent) = frame.agent {
        labels = labels.add(canvas.heading_marker(agent.position(), agent.heading()));
    }
    for x in 0..width {
        labels = labels.add(
            Text::new(x.to_string())
                .set("x", pad + (x as f32 + 0.5) * cs)
                .set("y", doc_height - pad / 2.0)
                .set("text-anchor", "middle")
                .set("font-size", 12)
                .set("fill", config.colors.text),
        );
    }
    for y in 0..height {
        labels = labels.add(
            Text::new(y.to_string())
                .set("x", pad / 2.0)
                .set("y", pad + (height as f32 - y as f32 - 0.5) * cs)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("font-size", 12)
                .set("fill", config.colors.text),
        );
    }
    doc.add(labels)
}

/// Observer that writes every frame to `<dir>/<index>.svg`.
///
/// Failures are logged and counted; they never interrupt an episode.
pub struct SvgFrameRenderer {
    output_dir: PathBuf,
    config: SvgConfig,
    frames_written: usize,
    failures: usize,
}

impl SvgFrameRenderer {
    /// Create a renderer writing into `output_dir` (created on first frame).
    pub fn new(output_dir: impl Into<PathBuf>, config: SvgConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            config,
            frames_written: 0,
            failures: 0,
        }
    }

    /// Directory frames are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of frames saved
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Number of frames that failed to save
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Path of the file for a frame index
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}.svg", index))
    }

    fn save(&self, frame: &Frame<'_>) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.frame_path(frame.index);
        svg::save(&path, &render_frame(frame, &self.config))?;
        Ok(path)
    }
}

impl ExplorationObserver for SvgFrameRenderer {
    fn on_frame(&mut self, frame: &Frame<'_>) {
        match self.save(frame) {
            Ok(path) => {
                self.frames_written += 1;
                trace!("[Render] frame {} -> {}", frame.index, path.display());
            }
            Err(e) => {
                self.failures += 1;
                warn!("[Render] frame {} not saved: {}", frame.index, e);
            }
        }
    }
}
