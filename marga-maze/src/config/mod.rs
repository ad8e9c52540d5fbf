//! Unified configuration loading.
//!
//! Loads all run settings from a single YAML file. Every section and field
//! is optional; missing values fall back to [`defaults`].

mod defaults;
mod error;
mod marga;
mod sections;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;
pub use sections::{BiasSection, EpisodeSection, ExplorationSection, OutputSection, RenderSection};
