//! Config error types.

use crate::game::Button;
use std::path::PathBuf;
use thiserror::Error;

/// A single rule a config broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("win_length must be between 1 and {max} (got {value})")]
    WinLengthOutOfRange { value: usize, max: usize },

    #[error("No sound configured for {button}")]
    MissingSound { button: Button },
}

/// Errors that can occur while loading a config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Cannot read config {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed, but broke one or more rules
    #[error("Invalid config: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
