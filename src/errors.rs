//! Centralized error handling.
//!
//! Configuration resolution has exactly one failure mode: a required
//! environment variable that is absent or empty. The error is returned,
//! never caught here; the startup routine is expected to check it and
//! abort with the diagnostic.

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {name} is not set or is empty")]
    MissingRequired { name: &'static str },
}

impl ConfigError {
    /// Name of the environment variable that caused the failure.
    pub fn variable(&self) -> &'static str {
        match self {
            ConfigError::MissingRequired { name } => name,
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
