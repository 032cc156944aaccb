//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/dua/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! threshold = 0.8
//! top = 30
//! all = false
//! keep_going = true
//! ```

use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use super::select::{DEFAULT_THRESHOLD, DEFAULT_TOP, SelectOptions, check_threshold};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default dominance threshold, in (0.0, 1.0)
    pub threshold: Option<f64>,

    /// Default number of results
    pub top: Option<usize>,

    /// List every candidate instead of the top N
    pub all: Option<bool>,

    /// Count unreadable files as zero bytes instead of aborting
    pub keep_going: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/dua/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dua").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }

    /// Selection options from the file alone, with defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the file sets an out-of-range threshold or a
    /// `top` of zero.
    pub fn select_options(&self) -> Result<SelectOptions> {
        let threshold = self
            .threshold
            .map_or(Ok(DEFAULT_THRESHOLD), check_threshold)?;

        let limit = if self.all.unwrap_or(false) {
            0
        } else {
            match self.top {
                Some(0) => anyhow::bail!("Config value `top` must be greater than 0"),
                Some(top) => top,
                None => DEFAULT_TOP,
            }
        };

        Ok(SelectOptions { threshold, limit })
    }
}
