//! # QXCore - demo entry point
//!
//! Walks through the container types and the logging facade.
//!
//! ## Initialization Sequence
//!
//! 1. **Configuration** - defaults, then the TOML file, then `QXCORE_LOG_*`
//!    variables, then command-line flags
//! 2. **Subscriber** - console and/or file sinks filtered by `RUST_LOG` or
//!    the configured level
//! 3. **Default logger** - re-initialised under the configured name
//!
//! ## Error Handling
//!
//! Configuration and installation failures halt startup with an `anyhow`
//! context chain. Nothing after that point can fail.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use qxcore_core::{Failure, IntoMaybe, IntoOutcome, Maybe, Outcome, VERSION};
use qxcore_log::{
    LogConfig, LogLevel, init_default_logger, qx_global_critical, qx_global_debug,
    qx_global_error, qx_global_info, qx_global_trace, qx_global_warn, subscriber,
    with_default_logger,
};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    subscriber::install(&config).context("Failed to install log subscriber")?;
    init_default_logger(&config.name, config.level)
        .with_context(|| format!("Failed to initialize logger '{}'", config.name))?;

    qx_global_info!("qxcore {} starting (level {})", VERSION, config.level);

    demo_levels();
    demo_runtime_level();
    demo_threads();
    demo_outcome();
    demo_maybe();

    qx_global_info!("qxcore {} finished", VERSION);
    with_default_logger(|logger| {
        logger.flush();
        logger.shutdown();
    });
    Ok(())
}

/// Layer defaults, the config file, the environment and the flags.
fn resolve_config(cli: &Cli) -> Result<LogConfig> {
    let base = match cli.config.as_deref() {
        Some(path) => LogConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => LogConfig::default(),
    };
    let config = cli.apply(
        base.with_env_overrides()
            .context("Invalid QXCORE_LOG_* environment override")?,
    );
    config.validate().context("Invalid log configuration")?;
    Ok(config)
}

fn demo_levels() {
    qx_global_trace!("trace: {}", "most verbose");
    qx_global_debug!("debug: {} + {} = {}", 2, 3, 5);
    qx_global_info!("info: {}", "routine progress");
    qx_global_warn!("warn: {}% disk used", 91);
    qx_global_error!("error: code {}", 404);
    qx_global_critical!("critical: {}", "simulated outage");

    let enabled: Vec<&str> = with_default_logger(|logger| {
        LogLevel::ALL
            .into_iter()
            .filter(|level| logger.is_enabled(*level))
            .map(LogLevel::as_str)
            .collect()
    });
    info!(enabled = ?enabled, "enabled levels");
}

/// Switch the default logger to WARN for a moment, then restore it.
fn demo_runtime_level() {
    let original = with_default_logger(|logger| logger.level());
    if let Err(err) = with_default_logger(|logger| logger.set_level(LogLevel::Warn)) {
        warn!(error = %err, "cannot change the default logger level");
        return;
    }
    qx_global_info!("hidden: info is below WARN");
    qx_global_warn!("runtime level changed to {}", LogLevel::Warn);

    if let Err(err) = with_default_logger(|logger| logger.set_level(original)) {
        warn!(error = %err, "cannot restore the default logger level");
        return;
    }
    qx_global_info!("runtime level restored to {}", original);
}

const WORKERS: usize = 4;
const STEPS_PER_WORKER: usize = 3;

fn demo_threads() {
    std::thread::scope(|scope| {
        for worker in 0..WORKERS {
            scope.spawn(move || {
                for step in 0..STEPS_PER_WORKER {
                    qx_global_info!("worker {} step {}", worker, step);
                }
            });
        }
    });
    qx_global_info!("{} workers finished", WORKERS);
}

fn parse_port(raw: &str) -> Outcome<u16> {
    raw.parse::<u16>().into_failure_outcome()
}

fn demo_outcome() {
    let ok = parse_port("8080");
    qx_global_info!("parse_port(\"8080\"): is_ok={} value={:?}", ok.is_ok(), ok.value().0);

    let bad = parse_port("eighty");
    qx_global_info!(
        "parse_port(\"eighty\"): is_err={} failure={}",
        bad.is_err(),
        bad.value().1.map_or_else(String::new, ToString::to_string)
    );
    qx_global_info!("fallback port: {}", bad.unwrap_or_logged(80));

    let missing: Outcome<u16> = Outcome::failure(Failure::msg("no port configured"));
    qx_global_debug!("unwrap_or(443) on failure: {}", missing.unwrap_or(443));
}

const SERVERS: [(&str, &str); 2] = [("primary", "10.0.0.1"), ("replica", "10.0.0.2")];

fn lookup_server(name: &str) -> Maybe<&'static str> {
    SERVERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, addr)| *addr)
        .into_maybe()
}

fn demo_maybe() {
    let primary = lookup_server("primary");
    qx_global_info!("primary: is_some={} addr={}", primary.is_some(), primary.unwrap_or("-"));

    let backup = lookup_server("backup")
        .tap_none(|| qx_global_warn!("no backup server configured"))
        .unwrap_or("127.0.0.1");
    qx_global_info!("backup falls back to {}", backup);
}
