//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::episode::EpisodeConfig;
use crate::exploration::ExplorationConfig;
use crate::io::SvgConfig;
use crate::wavefront::{BiasMode, StochasticBias};

use super::error::ConfigLoadError;
use super::sections::{BiasSection, EpisodeSection, ExplorationSection, OutputSection, RenderSection};

/// Full run configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct MargaConfig {
    /// Start and goal
    #[serde(default)]
    pub episode: EpisodeSection,

    /// Wavefront bias
    #[serde(default)]
    pub bias: BiasSection,

    /// Exploration controller
    #[serde(default)]
    pub exploration: ExplorationSection,

    /// Frame rendering
    #[serde(default)]
    pub render: RenderSection,

    /// Output location
    #[serde(default)]
    pub output: OutputSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Resolve the bias toggles (Euclidean takes precedence)
    pub fn bias_mode(&self) -> BiasMode {
        let stochastic = self.bias.stochastic.then(|| {
            StochasticBias::default()
                .with_factor(self.bias.factor)
                .with_decay(self.bias.decay)
                .with_euclidean_base(self.bias.euclidean_base)
        });
        BiasMode::from_flags(self.bias.euclidean, stochastic)
    }

    /// Convert to ExplorationConfig
    pub fn exploration_config(&self) -> ExplorationConfig {
        ExplorationConfig {
            max_steps: self.exploration.max_steps,
        }
    }

    /// Convert to EpisodeConfig
    pub fn episode_config(&self) -> EpisodeConfig {
        EpisodeConfig {
            start: self.episode.start,
            goal: self.episode.goal,
            bias: self.bias_mode(),
            attempts: self.bias.attempts,
            seed: self.bias.seed,
            exploration: self.exploration_config(),
        }
    }

    /// Convert to SvgConfig
    pub fn svg_config(&self) -> SvgConfig {
        SvgConfig::default()
            .with_cell_size(self.render.cell_size)
            .with_wavefront(self.render.show_wavefront)
            .with_heat_map(self.render.heat_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    #[test]
    fn test_default_config() {
        let config = MargaConfig::default();
        assert_eq!(config.bias.attempts, 1);
        assert_eq!(config.bias.decay, 0.998);
        assert_eq!(config.bias.factor, 0.1);
        assert_eq!(config.output.directory, ".");
        assert_eq!(config.bias_mode(), BiasMode::None);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
episode:
  goal: { x: 3, y: 1 }
bias:
  stochastic: true
  attempts: 5
  seed: 42
"#;
        let config = MargaConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.episode.start, GridCoord::new(0, 0));
        assert_eq!(config.episode.goal, Some(GridCoord::new(3, 1)));
        assert_eq!(config.bias.decay, 0.998);
        assert!(config.bias_mode().is_stochastic());

        let episode = config.episode_config();
        assert_eq!(episode.effective_attempts(), 5);
        assert_eq!(episode.seed, Some(42));
    }

    #[test]
    fn test_euclidean_wins() {
        let config = MargaConfig::from_yaml("bias: { euclidean: true, stochastic: true }").unwrap();
        assert_eq!(config.bias_mode(), BiasMode::Euclidean);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = MargaConfig::default();
        config.exploration.max_steps = Some(500);
        config.render.heat_map = true;
        let yaml = config.to_yaml().unwrap();
        assert_eq!(MargaConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let err = MargaConfig::from_yaml("bias: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MargaConfig::load(Path::new("/nonexistent/marga.yaml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }
}
