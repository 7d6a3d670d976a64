//! Lifecycle consistency across backends.
//!
//! Every backend must agree on initialisation, level handling and error
//! codes so that swapping the sink never changes observable behaviour.

#![allow(clippy::unwrap_used)]

use qxcore_log::{Backend, LogError, LogLevel, Logger, MemoryBackend, TracingBackend};

fn initialised<B: Backend>(backend: B) -> Logger<B> {
    let mut logger = Logger::with_backend(backend);
    logger.init("consistency", LogLevel::Debug).unwrap();
    logger
}

fn check_initialization<B: Backend>(backend: B) {
    let logger = initialised(backend);
    assert_eq!(logger.level(), LogLevel::Debug);
    assert!(logger.is_enabled(LogLevel::Debug));
    assert!(logger.is_enabled(LogLevel::Info));
    assert!(!logger.is_enabled(LogLevel::Trace));
}

fn check_set_level<B: Backend>(backend: B) {
    let mut logger = initialised(backend);

    logger.set_level(LogLevel::Warn).unwrap();
    assert_eq!(logger.level(), LogLevel::Warn);
    assert!(!logger.is_enabled(LogLevel::Debug));
    assert!(!logger.is_enabled(LogLevel::Info));
    assert!(logger.is_enabled(LogLevel::Warn));
    assert!(logger.is_enabled(LogLevel::Error));

    logger.set_level(LogLevel::Trace).unwrap();
    assert!(LogLevel::ALL.iter().all(|level| logger.is_enabled(*level)));
}

fn check_error_codes<B: Backend>(mut first: B, mut second: B) {
    let empty = first.init("", LogLevel::Info).unwrap_err();
    assert!(matches!(empty, LogError::InvalidName));
    assert_eq!(empty.code(), "INVALID_ARGUMENT");

    let early = second.set_level(LogLevel::Error).unwrap_err();
    assert_eq!(early.code(), "FAILED_PRECONDITION");

    second.init("consistency", LogLevel::Info).unwrap();
    let twice = second.init("consistency", LogLevel::Info).unwrap_err();
    assert_eq!(twice.code(), "ALREADY_EXISTS");
}

fn check_logging_is_infallible<B: Backend>(backend: B) {
    let mut logger = Logger::with_backend(backend);
    logger.info(format_args!("Should not crash: {}", 42));
    logger.flush();
    logger.shutdown();

    logger.init("consistency", LogLevel::Info).unwrap();
    logger.error(format_args!("Error code: {}", 404));
    logger.flush();
    logger.shutdown();
    logger.shutdown();
    assert!(!logger.is_enabled(LogLevel::Critical));
}

#[test]
fn test_initialization_consistency() {
    check_initialization(TracingBackend::new());
    check_initialization(MemoryBackend::new());
}

#[test]
fn test_set_level_consistency() {
    check_set_level(TracingBackend::new());
    check_set_level(MemoryBackend::new());
}

#[test]
fn test_error_handling_consistency() {
    check_error_codes(TracingBackend::new(), TracingBackend::new());
    check_error_codes(MemoryBackend::new(), MemoryBackend::new());
}

#[test]
fn test_logging_consistency() {
    check_logging_is_infallible(TracingBackend::new());
    check_logging_is_infallible(MemoryBackend::new());
}

#[test]
fn test_cross_backend_level_setting() {
    let mut tracing_logger = initialised(TracingBackend::new());
    let mut memory_logger = initialised(MemoryBackend::new());

    for level in LogLevel::ALL {
        tracing_logger.set_level(level).unwrap();
        memory_logger.set_level(level).unwrap();
        assert_eq!(tracing_logger.level(), level);
        assert_eq!(memory_logger.level(), level);
        for target in LogLevel::ALL {
            assert_eq!(
                tracing_logger.is_enabled(target),
                memory_logger.is_enabled(target)
            );
        }
    }
}
