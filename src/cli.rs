//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use dua::config::select::{parse_threshold, parse_top};
use dua::config::{FileConfig, ScanOptions, SelectOptions};

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "dua")]
#[command(
    about = "Scan a directory for the files and directories taking up the most space",
    long_about = "\"dua\" stands for \"disk usage analyzer\"; it scans the target directory \
                  for files and directories taking up the most space.\n\n\
                  A directory is listed as a whole unless one of its children holds more \
                  than THRESHOLD of its size, in which case its children are listed instead."
)]
#[command(version)]
pub struct Cli {
    /// The directory to scan
    #[arg(value_name = "DIRECTORY")]
    dir: PathBuf,

    /// Share of a directory's size above which a child replaces it in the
    /// results (default: 0.9; range (0.0 - 1.0))
    #[arg(
        short = 't',
        long,
        value_name = "THRESHOLD",
        value_parser = parse_threshold,
        allow_negative_numbers = true
    )]
    threshold: Option<f64>,

    /// Show the top N results (default: 20)
    #[arg(
        short = 'n',
        long = "top",
        value_name = "N",
        value_parser = parse_top,
        allow_negative_numbers = true,
        conflicts_with = "all"
    )]
    top: Option<usize>,

    /// Show every result instead of the top N
    #[arg(short = 'a', long)]
    all: bool,

    /// Output results as a single JSON object for scripting/piping
    #[arg(long)]
    json: bool,

    /// Count files whose size cannot be read as empty instead of aborting
    #[arg(long)]
    keep_going: bool,
}

impl Cli {
    /// The directory to scan.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.dir
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Extract selection options from CLI args and config file.
    ///
    /// - **threshold**: CLI > config > `0.9`
    /// - **limit**: `--all` (0) > `--top` > config `all`/`top` > `20`
    ///
    /// # Errors
    ///
    /// Returns an error if the config file holds an invalid threshold or count.
    pub fn select_options(&self, config: &FileConfig) -> Result<SelectOptions> {
        let file = config.select_options()?;

        let threshold = self.threshold.unwrap_or(file.threshold);
        let limit = if self.all {
            0
        } else {
            self.top.unwrap_or(file.limit)
        };

        SelectOptions::new(threshold, limit)
    }

    /// Extract scanning options from CLI args and config file.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        if self.keep_going || config.keep_going.unwrap_or(false) {
            ScanOptions::keep_going()
        } else {
            ScanOptions::default()
        }
    }
}
