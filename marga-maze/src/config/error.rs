//! Configuration loading errors.

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// YAML could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}
