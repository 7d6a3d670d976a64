//! Process-wide default logger.
//!
//! The default logger is created lazily as `"qxcore_default"` at
//! [`LogLevel::Info`] on first use, and can be replaced at any time with
//! [`init_default_logger`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::level::LogLevel;
use crate::logger::Logger;

/// Logger type used for the process-wide default.
pub type DefaultLogger = Logger;

pub const DEFAULT_LOGGER_NAME: &str = "qxcore_default";

static DEFAULT_LOGGER: Mutex<Option<DefaultLogger>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<DefaultLogger>> {
    DEFAULT_LOGGER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` against the default logger, creating it first if needed.
pub fn with_default_logger<R>(f: impl FnOnce(&mut DefaultLogger) -> R) -> R {
    let mut guard = lock();
    let logger = guard.get_or_insert_with(|| {
        let mut logger = Logger::new();
        if let Err(err) = logger.init(DEFAULT_LOGGER_NAME, LogLevel::Info) {
            tracing::warn!(error = %err, "failed to initialize default logger");
        }
        logger
    });
    f(logger)
}

/// Replace the default logger with a fresh one named `name` at `level`.
///
/// Any existing default logger is shut down first. The new logger is
/// installed even when its initialisation fails.
///
/// # Errors
///
/// Returns the new logger's initialisation error, e.g. for an empty name.
pub fn init_default_logger(name: &str, level: LogLevel) -> Result<()> {
    let mut guard = lock();
    if let Some(mut previous) = guard.take() {
        previous.shutdown();
    }
    let mut logger = Logger::new();
    let status = logger.init(name, level);
    *guard = Some(logger);
    status
}

#[macro_export]
macro_rules! qx_global_trace {
    ($($arg:tt)+) => {
        $crate::with_default_logger(|logger| logger.trace(::std::format_args!($($arg)+)))
    };
}

#[macro_export]
macro_rules! qx_global_debug {
    ($($arg:tt)+) => {
        $crate::with_default_logger(|logger| logger.debug(::std::format_args!($($arg)+)))
    };
}

#[macro_export]
macro_rules! qx_global_info {
    ($($arg:tt)+) => {
        $crate::with_default_logger(|logger| logger.info(::std::format_args!($($arg)+)))
    };
}

#[macro_export]
macro_rules! qx_global_warn {
    ($($arg:tt)+) => {
        $crate::with_default_logger(|logger| logger.warn(::std::format_args!($($arg)+)))
    };
}

#[macro_export]
macro_rules! qx_global_error {
    ($($arg:tt)+) => {
        $crate::with_default_logger(|logger| logger.error(::std::format_args!($($arg)+)))
    };
}

#[macro_export]
macro_rules! qx_global_critical {
    ($($arg:tt)+) => {
        $crate::with_default_logger(|logger| logger.critical(::std::format_args!($($arg)+)))
    };
}
