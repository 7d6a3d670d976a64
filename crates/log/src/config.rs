//! Logging configuration loading
//!
//! # Hierarchy
//!
//! Configuration is layered in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. TOML config file
//! 3. Environment variables: `QXCORE_LOG_*`
//! 4. CLI flags (applied by the caller)
//!
//! # Example Config
//!
//! ```toml
//! name = "ingest"
//! level = "debug"
//! console = true
//! file = "ingest.log"
//! ansi = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, Result};
use crate::level::LogLevel;

pub const ENV_NAME: &str = "QXCORE_LOG_NAME";
pub const ENV_LEVEL: &str = "QXCORE_LOG_LEVEL";
pub const ENV_FILE: &str = "QXCORE_LOG_FILE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Logger name, attached to every record.
    pub name: String,
    pub level: LogLevel,
    /// Write records to stdout.
    pub console: bool,
    /// Also write records to this file, truncated on start.
    pub file: Option<PathBuf>,
    /// Colourise console output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            name: "qxcore".to_string(),
            level: LogLevel::Info,
            console: true,
            file: None,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Parse a TOML document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Config`] for malformed TOML, unknown keys or an
    /// unrecognised level.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Config`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            LogError::config(format!("failed to read '{}': {err}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Apply `QXCORE_LOG_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidLevel`] when `QXCORE_LOG_LEVEL` does not
    /// name a level.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Same as [`LogConfig::with_env_overrides`].
    pub fn with_overrides_from<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty variable counts as unset.
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let level = lookup(ENV_LEVEL)
            .map(|raw| raw.parse::<LogLevel>())
            .transpose()?
            .unwrap_or(self.level);

        Ok(Self {
            name: lookup(ENV_NAME).unwrap_or(self.name),
            level,
            file: lookup(ENV_FILE).map(PathBuf::from).or(self.file),
            ..self
        })
    }

    /// Check invariants that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidName`] for an empty or blank name.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LogError::InvalidName);
        }
        Ok(())
    }
}
