//! gRPC server configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::duration;

/// gRPC server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrpcConfig {
    /// Port the server listens on.
    #[serde(default)]
    pub port: u16,
    /// Per-request timeout.
    #[serde(default, with = "duration")]
    pub timeout: Duration,
}
