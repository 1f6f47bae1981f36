//! Settings loading and logger bootstrap for the service.

pub mod cli;
pub mod config;
pub mod context;
pub mod logging;

pub use config::{ConfigError, Environment, GrpcConfig, Settings};
pub use context::AppContext;
pub use logging::{LogFormat, Logger, build_logger};
