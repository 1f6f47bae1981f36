//! Process-wide application context.

use std::path::Path;

use crate::config::{ConfigError, Settings};
use crate::logging::{Logger, build_logger};

/// Settings and logger built once at startup and passed by reference to
/// whatever needs them.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub logger: Logger,
}

impl AppContext {
    /// Load settings (see [`Settings::load`]) and build the matching logger.
    pub fn bootstrap(config_flag: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = Settings::load(config_flag)?;
        Ok(Self::from_settings(settings))
    }

    pub fn from_settings(settings: Settings) -> Self {
        let logger = build_logger(settings.env);
        Self { settings, logger }
    }
}
