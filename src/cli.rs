//! CLI definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::Parser;
use qxcore_log::{LogConfig, LogLevel};

/// QXCore demo
#[derive(Parser, Debug)]
#[command(name = "qxcore")]
#[command(version)]
#[command(about = "Walk through the QXCore containers and logging facade")]
#[command(
    long_about = "Loads a logging configuration (defaults, TOML file, QXCORE_LOG_* variables, flags), installs it, and exercises Outcome, Maybe and the logger at every level."
)]
pub struct Cli {
    /// TOML logging config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum log level (trace, debug, info, warn, error, critical)
    #[arg(short, long)]
    pub level: Option<LogLevel>,

    /// Logger name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Also write records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not write records to stdout
    #[arg(long, default_value_t = false)]
    pub no_console: bool,

    /// Disable coloured console output
    #[arg(long, default_value_t = false)]
    pub no_ansi: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `config`.
    #[must_use]
    pub fn apply(&self, config: LogConfig) -> LogConfig {
        LogConfig {
            name: self.name.clone().unwrap_or(config.name),
            level: self.level.unwrap_or(config.level),
            file: self.log_file.clone().or(config.file),
            console: config.console && !self.no_console,
            ansi: config.ansi && !self.no_ansi,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "qxcore",
            "--level",
            "warning",
            "--name",
            "demo",
            "--no-console",
        ])
        .unwrap();
        let config = cli.apply(LogConfig::default());
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.name, "demo");
        assert!(!config.console);
        assert!(config.ansi);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["qxcore"]).unwrap();
        let base = LogConfig {
            level: LogLevel::Error,
            ..LogConfig::default()
        };
        assert_eq!(cli.apply(base.clone()), base);
    }

    #[test]
    fn test_bad_level_rejected() {
        assert!(Cli::try_parse_from(["qxcore", "--level", "loud"]).is_err());
    }
}
