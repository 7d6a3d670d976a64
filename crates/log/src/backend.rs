//! The sink a [`Logger`](crate::Logger) forwards records to.
//!
//! Every backend honours the same lifecycle contract:
//!
//! - `init` fails with [`LogError::AlreadyInitialized`] when called twice and
//!   with [`LogError::InvalidName`] for an empty name.
//! - `set_level` fails with [`LogError::NotInitialized`] before `init`.
//! - `is_enabled` is false until `init` and again after `shutdown`.
//! - `log`, `flush` and `shutdown` never fail; on an uninitialised backend
//!   they do nothing.
//!
//! [`LogError::AlreadyInitialized`]: crate::LogError::AlreadyInitialized
//! [`LogError::InvalidName`]: crate::LogError::InvalidName
//! [`LogError::NotInitialized`]: crate::LogError::NotInitialized

use std::fmt;

use crate::error::{LogError, Result};
use crate::level::LogLevel;

/// A formatted log record as seen by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Severity the record was logged at.
    pub level: LogLevel,
    /// Name of the logger that emitted it.
    pub logger: String,
    /// The fully formatted message.
    pub message: String,
}

/// Destination for log records.
pub trait Backend {
    /// Initialise the backend under `name` at `level`.
    ///
    /// # Errors
    ///
    /// [`LogError::AlreadyInitialized`] if already initialised,
    /// [`LogError::InvalidName`] if `name` is empty.
    fn init(&mut self, name: &str, level: LogLevel) -> Result<()>;

    /// Change the minimum level.
    ///
    /// # Errors
    ///
    /// [`LogError::NotInitialized`] before `init`.
    fn set_level(&mut self, level: LogLevel) -> Result<()>;

    fn level(&self) -> LogLevel;

    fn is_initialized(&self) -> bool;

    fn is_enabled(&self, level: LogLevel) -> bool {
        self.is_initialized() && self.level().enables(level)
    }

    /// Emit a record. Disabled levels are dropped silently.
    fn log(&mut self, level: LogLevel, args: fmt::Arguments<'_>);

    fn flush(&mut self);

    fn shutdown(&mut self);
}

/// Lifecycle bookkeeping shared by the bundled backends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BackendState {
    name: Option<String>,
    level: LogLevel,
}

impl BackendState {
    pub(crate) fn init(&mut self, name: &str, level: LogLevel) -> Result<()> {
        if self.name.is_some() {
            return Err(LogError::AlreadyInitialized);
        }
        if name.is_empty() {
            return Err(LogError::InvalidName);
        }
        self.name = Some(name.to_string());
        self.level = level;
        Ok(())
    }

    pub(crate) fn set_level(&mut self, level: LogLevel) -> Result<()> {
        if self.name.is_none() {
            return Err(LogError::NotInitialized);
        }
        self.level = level;
        Ok(())
    }

    pub(crate) const fn level(&self) -> LogLevel {
        self.level
    }

    pub(crate) fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) const fn is_initialized(&self) -> bool {
        self.name.is_some()
    }

    /// The logger name, only when `level` would be emitted.
    pub(crate) fn accepts(&self, level: LogLevel) -> Option<&str> {
        self.name().filter(|_| self.level.enables(level))
    }

    /// Returns the name the backend was running under, if any.
    pub(crate) fn shutdown(&mut self) -> Option<String> {
        self.name.take()
    }
}
