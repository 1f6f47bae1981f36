//! Configuration loading and validation for the service.
//!
//! Uses serde_yaml to load a YAML settings file whose path comes from the
//! `--config` flag or the `CONFIG_PATH` environment variable.

mod duration;
mod environment;
mod error;
mod grpc;

pub use environment::{Environment, InvalidEnvironment};
pub use error::ConfigError;
pub use grpc::GrpcConfig;

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::{env, io};
use tracing::debug;

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Validated service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Enables debug behaviour in the service.
    pub debug: bool,
    /// Deployment environment.
    pub env: Environment,
    /// Root directory the service works from.
    pub root_dir: String,
    /// gRPC server settings.
    pub grpc: GrpcConfig,
}

/// Settings exactly as decoded, before the environment tag is checked.
#[derive(Debug, Deserialize)]
struct RawSettings {
    debug: bool,
    #[serde(default)]
    env: String,
    root_dir: String,
    #[serde(default)]
    grpc: GrpcConfig,
}

impl Settings {
    /// Load settings from the path given by `flag`, or from `CONFIG_PATH` if
    /// the flag is absent or empty.
    pub fn load(flag: Option<&Path>) -> Result<Self, ConfigError> {
        let path = resolve_config_path(flag, env::var_os(CONFIG_PATH_ENV))
            .ok_or(ConfigError::MissingPath)?;
        Self::load_from(&path)
    }

    /// Load settings from the YAML file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Reading config file");

        let raw: RawSettings =
            serde_yaml::from_reader(io::BufReader::new(file)).map_err(ConfigError::Decode)?;
        raw.validate()
    }

    /// Decode and validate settings from an in-memory YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings = serde_yaml::from_str(yaml).map_err(ConfigError::Decode)?;
        raw.validate()
    }

    /// Encode settings back into the YAML shape accepted by [`Settings::from_yaml`].
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::Encode)
    }
}

impl RawSettings {
    /// Validate the decoded document and produce typed settings.
    fn validate(self) -> Result<Settings, ConfigError> {
        let env: Environment = self.env.parse()?;

        Ok(Settings {
            debug: self.debug,
            env,
            root_dir: self.root_dir,
            grpc: self.grpc,
        })
    }
}

/// Pick the config path: a non-empty flag wins, then a non-empty env value.
pub fn resolve_config_path(flag: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.as_os_str().is_empty()) {
        debug!(path = %path.display(), "Config path from --config");
        return Some(path.to_path_buf());
    }

    let path = env_value.filter(|v| !v.is_empty()).map(PathBuf::from)?;
    debug!(path = %path.display(), "Config path from {}", CONFIG_PATH_ENV);
    Some(path)
}
