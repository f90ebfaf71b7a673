//! Configuration system for the virtual CPU.
//!
//! This module defines the host-side switches that control a run. It provides:
//! 1. **Defaults:** Tracing, dumps, and statistics all off.
//! 2. **Structures:** A `general` section; unknown keys are rejected so typos surface early.
//! 3. **Loading:** JSON from a string or a file.
//!
//! The architecture itself (register count, memory size, stack reset value) is fixed and
//! not configurable.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General run options.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the text is not valid JSON or has unknown keys.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as [`Config::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Send a `TRACE:` line to the output sink before every step.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Dump PC, flags and registers when the run ends.
    #[serde(default)]
    pub dump_on_exit: bool,

    /// Print run statistics when the run ends.
    #[serde(default)]
    pub print_stats: bool,
}
