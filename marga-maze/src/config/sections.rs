//! Configuration sections.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

use super::defaults;

/// Start and goal cells
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct EpisodeSection {
    /// Start cell
    #[serde(default)]
    pub start: GridCoord,

    /// Goal cell (north-east corner when absent)
    #[serde(default)]
    pub goal: Option<GridCoord>,
}

/// Wavefront bias settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BiasSection {
    /// Add the Euclidean goal distance to every wavefront value
    #[serde(default)]
    pub euclidean: bool,

    /// Add a decaying random perturbation ("hope mode")
    #[serde(default)]
    pub stochastic: bool,

    /// Episodes to run under stochastic bias; the best one is kept
    #[serde(default = "defaults::attempts")]
    pub attempts: usize,

    /// Per-cell decay of the perturbation width
    #[serde(default = "defaults::decay")]
    pub decay: f32,

    /// Initial perturbation half-width
    #[serde(default = "defaults::factor")]
    pub factor: f32,

    /// Layer the Euclidean distance under the perturbation
    #[serde(default)]
    pub euclidean_base: bool,

    /// Seed for reproducible attempts
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BiasSection {
    fn default() -> Self {
        Self {
            euclidean: false,
            stochastic: false,
            attempts: defaults::attempts(),
            decay: defaults::decay(),
            factor: defaults::factor(),
            euclidean_base: false,
            seed: None,
        }
    }
}

/// Exploration controller settings
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ExplorationSection {
    /// Step ceiling (unlimited when absent)
    #[serde(default)]
    pub max_steps: Option<usize>,
}

/// Frame rendering settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderSection {
    /// Write an SVG per exploration step
    #[serde(default)]
    pub save_frames: bool,

    /// Print wavefront values in each cell
    #[serde(default)]
    pub show_wavefront: bool,

    /// Shade cells by wavefront value
    #[serde(default)]
    pub heat_map: bool,

    /// Pixels per cell
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            save_frames: false,
            show_wavefront: false,
            heat_map: false,
            cell_size: defaults::cell_size(),
        }
    }
}

/// Output location
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Directory that receives one sub-directory per run
    #[serde(default = "defaults::output_directory")]
    pub directory: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: defaults::output_directory(),
        }
    }
}
