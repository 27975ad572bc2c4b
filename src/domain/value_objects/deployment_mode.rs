//! Deployment mode of the running process.

use serde::Deserialize;

use crate::shared::error::AppError;

/// Sentinel platform value that unlocks destructive admin operations.
pub const DEV_PLATFORM: &str = "dev";

/// Which environment the process is deployed in.
///
/// Deserializes from the raw `platform` string so that any value other than
/// `dev` is kept verbatim for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DeploymentMode {
    Dev,
    Other(String),
}

impl DeploymentMode {
    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Dev => DEV_PLATFORM,
            Self::Other(name) => name,
        }
    }

    /// Refuse a destructive operation unless running in dev mode.
    pub fn require_dev(&self, operation: &str) -> Result<(), AppError> {
        if self.is_dev() {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "{} is only allowed in the dev environment",
                operation
            )))
        }
    }
}

impl From<String> for DeploymentMode {
    fn from(value: String) -> Self {
        if value == DEV_PLATFORM {
            Self::Dev
        } else {
            Self::Other(value)
        }
    }
}

impl From<&str> for DeploymentMode {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
