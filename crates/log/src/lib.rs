//! # QXCore Log
//!
//! A small logging facade with compile-time pluggable backends.
//!
//! - **Levels**: [`LogLevel`] from `Trace` to `Critical`, parsed
//!   case-insensitively (`warning` and `fatal` are accepted aliases)
//! - **Frontend**: [`Logger`] filters by level before formatting and forwards
//!   to its [`Backend`]
//! - **Backends**: [`TracingBackend`] emits `tracing` events,
//!   [`MemoryBackend`] captures records in memory
//! - **Default logger**: a process-wide [`DefaultLogger`] behind
//!   [`with_default_logger`] and the `qx_global_*!` macros
//! - **Configuration**: [`LogConfig`] layered from defaults, TOML and
//!   `QXCORE_LOG_*` variables, installed via [`subscriber::install`]
//!
//! # Example
//!
//! ```no_run
//! use qxcore_log::{qx_global_info, subscriber, LogConfig};
//!
//! let config = LogConfig::default().with_env_overrides()?;
//! subscriber::install(&config)?;
//! qx_global_info!("service started, version {}", "0.1.0");
//! # Ok::<(), qxcore_log::LogError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod backend;
pub mod config;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod memory;
pub mod subscriber;
pub mod tracing_backend;

pub use backend::{Backend, Record};
pub use config::LogConfig;
pub use error::{LogError, Result};
pub use global::{DEFAULT_LOGGER_NAME, DefaultLogger, init_default_logger, with_default_logger};
pub use level::{LogLevel, is_level_enabled};
pub use logger::Logger;
pub use memory::{MemoryBackend, MemoryRecords};
pub use tracing_backend::TracingBackend;
