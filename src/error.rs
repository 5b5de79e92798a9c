use std::path::PathBuf;

use thiserror::Error;

/// Faults raised while evaluating a single frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("malformed landmark frame: {reason}")]
    MalformedFrame { reason: String },
}

/// Faults raised while authoring or loading gesture templates.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("no gesture templates registered")]
    EmptyLibrary,
    #[error("gesture name must not be empty")]
    EmptyName,
    #[error("gesture `{0}` is registered twice")]
    DuplicateGesture(String),
    #[error("gesture `{gesture}` has weight {weight}, expected a value in [0, 1]")]
    InvalidWeight { gesture: String, weight: f32 },
    #[error("gesture `{gesture}`: {reason}")]
    InvalidCriterion { gesture: String, reason: String },
    #[error("failed to read gesture definitions from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse gesture definitions")]
    Parse(#[from] toml::de::Error),
}

/// Faults raised while loading or validating [`crate::EstimatorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
