//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set (or empty).
    #[error("{0} is not set")]
    Missing(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("invalid value for {name}: {reason}")]
    Invalid {
        name: &'static str,
        reason: String,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
