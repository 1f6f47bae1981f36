//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use super::InvalidEnvironment;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config path: pass --config or set {}", super::CONFIG_PATH_ENV)]
    MissingPath,
    #[error("failed to open config file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode config: {0}")]
    Decode(#[source] serde_yaml::Error),
    #[error("validation failed: {0}")]
    Validation(#[from] InvalidEnvironment),
    #[error("failed to encode config: {0}")]
    Encode(#[source] serde_yaml::Error),
}
