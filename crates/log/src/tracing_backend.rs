//! Backend that forwards records to `tracing`.
//!
//! Records become `tracing` events with a `logger` field naming the logger.
//! Where they end up (console, file) is decided by the installed subscriber,
//! see [`crate::subscriber`].

use std::fmt;

use crate::backend::{Backend, BackendState};
use crate::error::Result;
use crate::level::LogLevel;

#[derive(Debug, Default)]
pub struct TracingBackend {
    state: BackendState,
}

impl TracingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.state.name()
    }
}

impl Backend for TracingBackend {
    fn init(&mut self, name: &str, level: LogLevel) -> Result<()> {
        self.state.init(name, level)?;
        tracing::debug!(logger = name, level = %level, "logger initialized");
        Ok(())
    }

    fn set_level(&mut self, level: LogLevel) -> Result<()> {
        self.state.set_level(level)
    }

    fn level(&self) -> LogLevel {
        self.state.level()
    }

    fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    fn log(&mut self, level: LogLevel, args: fmt::Arguments<'_>) {
        let Some(logger) = self.state.accepts(level) else {
            return;
        };
        match level {
            LogLevel::Trace => tracing::trace!(logger, "{args}"),
            LogLevel::Debug => tracing::debug!(logger, "{args}"),
            LogLevel::Info => tracing::info!(logger, "{args}"),
            LogLevel::Warn => tracing::warn!(logger, "{args}"),
            LogLevel::Error => tracing::error!(logger, "{args}"),
            LogLevel::Critical => tracing::error!(logger, critical = true, "{args}"),
        }
    }

    // Subscribers write through on every event; nothing is buffered here.
    fn flush(&mut self) {}

    fn shutdown(&mut self) {
        if let Some(name) = self.state.shutdown() {
            tracing::debug!(logger = %name, "logger shut down");
        }
    }
}
