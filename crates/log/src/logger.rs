//! The logging frontend.
//!
//! A [`Logger`] is generic over its [`Backend`], so the sink is picked at
//! compile time. Records below the configured level are dropped before any
//! formatting happens.
//!
//! # Example
//!
//! ```
//! use qxcore_log::{qx_info, LogLevel, Logger, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! let records = backend.records();
//! let mut logger = Logger::with_backend(backend);
//! logger.init("example", LogLevel::Debug)?;
//!
//! qx_info!(logger, "Formatted message: {}", 42);
//! logger.trace(format_args!("filtered out"));
//!
//! assert_eq!(records.messages(), vec!["Formatted message: 42".to_string()]);
//! # Ok::<(), qxcore_log::LogError>(())
//! ```

use std::fmt;

use crate::backend::Backend;
use crate::error::Result;
use crate::level::LogLevel;
use crate::tracing_backend::TracingBackend;

/// Logging frontend over a backend `B`.
///
/// Loggers are move-only; dropping one shuts its backend down.
#[derive(Debug)]
pub struct Logger<B: Backend = TracingBackend> {
    backend: B,
}

impl Logger {
    /// A logger over the `tracing` backend. Call [`Logger::init`] before use.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(TracingBackend::new())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Logger<B> {
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Initialise the logger.
    ///
    /// # Errors
    ///
    /// Fails if the logger is already initialised or `name` is empty.
    pub fn init(&mut self, name: &str, level: LogLevel) -> Result<()> {
        self.backend.init(name, level)
    }

    /// Change the minimum level.
    ///
    /// # Errors
    ///
    /// Fails if the logger has not been initialised.
    pub fn set_level(&mut self, level: LogLevel) -> Result<()> {
        self.backend.set_level(level)
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.backend.level()
    }

    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.backend.is_enabled(level)
    }

    pub fn log(&mut self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.backend.log(level, args);
        }
    }

    /// Log a plain message.
    pub fn log_str(&mut self, level: LogLevel, msg: &str) {
        self.log(level, format_args!("{msg}"));
    }

    pub fn trace(&mut self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    pub fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    pub fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    pub fn critical(&mut self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Critical, args);
    }

    pub fn flush(&mut self) {
        self.backend.flush();
    }

    pub fn shutdown(&mut self) {
        self.backend.shutdown();
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> Drop for Logger<B> {
    fn drop(&mut self) {
        self.backend.shutdown();
    }
}

/// Log through `logger` at an explicit level with `format!` syntax.
#[macro_export]
macro_rules! qx_log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! qx_trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! qx_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! qx_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! qx_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! qx_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! qx_critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critical(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use crate::memory::MemoryBackend;

    fn memory_logger() -> (Logger<MemoryBackend>, crate::memory::MemoryRecords) {
        let backend = MemoryBackend::new();
        let records = backend.records();
        (Logger::with_backend(backend), records)
    }

    #[test]
    fn test_initialization() {
        let mut logger = Logger::new();
        assert!(logger.init("test_logger", LogLevel::Debug).is_ok());
        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(logger.is_enabled(LogLevel::Debug));
        assert!(logger.is_enabled(LogLevel::Info));
        assert!(!logger.is_enabled(LogLevel::Trace));
    }

    #[test]
    fn test_set_level() {
        let mut logger = Logger::new();
        assert!(logger.init("test_logger", LogLevel::Info).is_ok());
        assert!(logger.set_level(LogLevel::Error).is_ok());
        assert_eq!(logger.level(), LogLevel::Error);
        assert!(logger.is_enabled(LogLevel::Error));
        assert!(logger.is_enabled(LogLevel::Critical));
        assert!(!logger.is_enabled(LogLevel::Warn));
        assert!(!logger.is_enabled(LogLevel::Info));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut logger = Logger::new();
        assert!(matches!(
            logger.init("", LogLevel::Info),
            Err(LogError::InvalidName)
        ));
    }

    #[test]
    fn test_convenience_methods() {
        let (mut logger, records) = memory_logger();
        assert!(logger.init("test_logger", LogLevel::Debug).is_ok());

        qx_trace!(logger, "Trace message");
        qx_debug!(logger, "Debug message");
        qx_info!(logger, "Formatted: {}", "test");
        qx_warn!(logger, "Warning message");
        qx_error!(logger, "Error: {} - {}", "code", 500);
        qx_critical!(logger, "Critical message");
        qx_log!(logger, LogLevel::Info, "explicit {}", "level");
        logger.log_str(LogLevel::Warn, "plain");

        assert_eq!(
            records.messages(),
            vec![
                "Debug message",
                "Formatted: test",
                "Warning message",
                "Error: code - 500",
                "Critical message",
                "explicit level",
                "plain",
            ]
        );
    }

    #[test]
    fn test_level_filtering() {
        let (mut logger, records) = memory_logger();
        assert!(logger.init("test_logger", LogLevel::Warn).is_ok());
        for level in LogLevel::ALL {
            logger.log(level, format_args!("{level}"));
        }
        let levels: Vec<LogLevel> = records.snapshot().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Warn, LogLevel::Error, LogLevel::Critical]
        );
    }

    #[test]
    fn test_flush_and_shutdown() {
        let (mut logger, records) = memory_logger();
        assert!(logger.init("test_logger", LogLevel::Info).is_ok());
        logger.flush();
        logger.shutdown();
        assert!(!logger.is_enabled(LogLevel::Info));
        logger.info(format_args!("after shutdown"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_drop_shuts_down() {
        let (mut logger, records) = memory_logger();
        assert!(logger.init("test_logger", LogLevel::Info).is_ok());
        logger.info(format_args!("kept"));
        drop(logger);
        assert_eq!(records.messages(), vec!["kept"]);
    }
}
