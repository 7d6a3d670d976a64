//! Error types for the logging facade.
//!
//! All errors are explicit and typed; logging itself never fails loudly.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for logging operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Errors raised by loggers, backends and configuration loading.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("logger not initialized")]
    NotInitialized,

    #[error("logger name cannot be empty")]
    InvalidName,

    #[error("invalid log level '{input}'")]
    InvalidLevel { input: String },

    #[error("invalid log configuration: {reason}")]
    Config { reason: String },

    #[error("failed to open log file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Create an invalid level error.
    pub fn invalid_level(input: impl Into<String>) -> Self {
        Self::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns the machine-readable error code for this error.
    ///
    /// Error codes are always in `SCREAMING_SNAKE_CASE` format.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "ALREADY_EXISTS",
            Self::NotInitialized => "FAILED_PRECONDITION",
            Self::InvalidName | Self::InvalidLevel { .. } => "INVALID_ARGUMENT",
            Self::Config { .. } => "INVALID_CONFIG",
            Self::FileOpen { .. } | Self::Io(_) => "INTERNAL",
        }
    }
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("failed to parse config: {err}"))
    }
}
