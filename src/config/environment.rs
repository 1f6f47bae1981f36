//! Deployment environment tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment the service runs in. Selects validation and logging policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Dev,
    Prod,
}

impl Environment {
    /// Every accepted environment, in declaration order.
    pub const ALL: [Environment; 3] = [Environment::Local, Environment::Dev, Environment::Prod];

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = InvalidEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| InvalidEnvironment {
                value: s.to_string(),
            })
    }
}

/// A string that is not one of the accepted environment tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("env value {value:?} is not valid: [{}]", allowed_list())]
pub struct InvalidEnvironment {
    pub value: String,
}

fn allowed_list() -> String {
    Environment::ALL
        .iter()
        .map(|env| env.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
