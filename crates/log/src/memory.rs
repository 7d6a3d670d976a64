//! In-memory backend that captures formatted records.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::{Backend, BackendState, Record};
use crate::error::Result;
use crate::level::LogLevel;

/// Shared view of the records captured by a [`MemoryBackend`].
///
/// Handles stay valid after the backend has been moved into a logger.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecords {
    inner: Arc<Mutex<Vec<Record>>>,
}

impl MemoryRecords {
    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every captured record, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Record> {
        self.lock().clone()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|record| record.message.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, record: Record) {
        self.lock().push(record);
    }
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: BackendState,
    records: MemoryRecords,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle onto the captured records.
    #[must_use]
    pub fn records(&self) -> MemoryRecords {
        self.records.clone()
    }
}

impl Backend for MemoryBackend {
    fn init(&mut self, name: &str, level: LogLevel) -> Result<()> {
        self.state.init(name, level)
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
        if let Some(logger) = self.state.accepts(level) {
            self.records.push(Record {
                level,
                logger: logger.to_string(),
                message: args.to_string(),
            });
        }
    }

    fn flush(&mut self) {}

    fn shutdown(&mut self) {
        let _ = self.state.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_enabled_records() {
        let mut backend = MemoryBackend::new();
        let records = backend.records();
        assert!(backend.init("mem", LogLevel::Warn).is_ok());

        backend.log(LogLevel::Info, format_args!("dropped"));
        backend.log(LogLevel::Warn, format_args!("Warning: {} - {}", "test", 123));
        backend.log(LogLevel::Critical, format_args!("Critical"));

        assert_eq!(
            records.snapshot(),
            vec![
                Record {
                    level: LogLevel::Warn,
                    logger: "mem".to_string(),
                    message: "Warning: test - 123".to_string(),
                },
                Record {
                    level: LogLevel::Critical,
                    logger: "mem".to_string(),
                    message: "Critical".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_nothing_captured_before_init_or_after_shutdown() {
        let mut backend = MemoryBackend::new();
        let records = backend.records();
        backend.log(LogLevel::Critical, format_args!("before init"));
        assert!(backend.init("mem", LogLevel::Trace).is_ok());
        backend.shutdown();
        backend.log(LogLevel::Critical, format_args!("after shutdown"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut backend = MemoryBackend::new();
        let records = backend.records();
        assert!(backend.init("mem", LogLevel::Info).is_ok());
        backend.log(LogLevel::Info, format_args!("one"));
        assert_eq!(records.len(), 1);
        records.clear();
        assert!(records.is_empty());
    }
}
