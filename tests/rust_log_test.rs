//! `RUST_LOG` precedence over the configured level.
//!
//! The filter reads the process environment once at startup, so each case
//! runs the `qxcore` binary with its own environment.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::Path;
use std::process::{Command, Output};

fn qxcore_with_rust_log(rust_log: Option<&str>, log_file: &Path) -> std::io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_qxcore"));
    command
        .args(["--level", "error", "--no-console", "--log-file"])
        .arg(log_file)
        .env_remove("RUST_LOG")
        .env_remove("QXCORE_LOG_NAME")
        .env_remove("QXCORE_LOG_LEVEL")
        .env_remove("QXCORE_LOG_FILE");
    if let Some(directives) = rust_log {
        command.env("RUST_LOG", directives);
    }
    command.output()
}

#[test]
fn test_rust_log_overrides_configured_level() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("rust-log.log");

    let output = qxcore_with_rust_log(Some("debug"), &log_path)?;
    assert!(output.status.success(), "exit status {:?}", output.status);

    let contents = std::fs::read_to_string(&log_path)?;
    // Plain tracing events pass the subscriber filter at DEBUG.
    assert!(contents.contains("enabled levels"), "{contents}");
    assert!(contents.contains("logger initialized"), "{contents}");
    // Logger records are still filtered by the logger's own level.
    assert!(!contents.contains("routine progress"), "{contents}");
    assert!(contents.contains("error: code 404"), "{contents}");
    Ok(())
}

#[test]
fn test_configured_level_applies_without_rust_log() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("configured.log");

    let output = qxcore_with_rust_log(None, &log_path)?;
    assert!(output.status.success(), "exit status {:?}", output.status);

    let contents = std::fs::read_to_string(&log_path)?;
    assert!(!contents.contains("enabled levels"), "{contents}");
    assert!(!contents.contains("logger initialized"), "{contents}");
    assert!(contents.contains("error: code 404"), "{contents}");
    Ok(())
}
