//! Subscriber installation from a [`LogConfig`].
//!
//! The subscriber filters with `RUST_LOG` when set, otherwise with the
//! configured level, and fans records out to the console and an optional
//! log file.

use std::fs::File;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

use crate::config::LogConfig;
use crate::error::{LogError, Result};

/// Build a subscriber for `config` without installing it.
///
/// # Errors
///
/// Returns [`LogError::InvalidName`] for an invalid config and
/// [`LogError::FileOpen`] when the log file cannot be created.
pub fn build(config: &LogConfig) -> Result<impl Subscriber + Send + Sync + 'static> {
    config.validate()?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(config.level).into())
        .from_env_lossy();

    let console_layer = config
        .console
        .then(|| fmt::layer().with_ansi(config.ansi).with_target(false));

    let file_layer = config
        .file
        .as_deref()
        .map(|path| -> Result<_> {
            let file = File::create(path).map_err(|source| LogError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)))
        })
        .transpose()?;

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer))
}

/// Build a subscriber for `config` and install it as the global default.
///
/// # Errors
///
/// Everything [`build`] returns, plus [`LogError::AlreadyInitialized`] when a
/// global subscriber is already set.
pub fn install(config: &LogConfig) -> Result<()> {
    let subscriber = build(config)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LogError::AlreadyInitialized)
}
