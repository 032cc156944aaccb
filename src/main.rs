//! # dua
//!
//! "dua" stands for "disk usage analyzer"; it scans the target directory for
//! files and directories taking up the most space.
//!
//! ## Usage
//!
//! ```bash
//! # Top 20 entries under the home directory
//! dua ~
//!
//! # Top 5, drilling into directories more eagerly
//! dua -t 0.5 -n 5 /var
//!
//! # Every candidate, as JSON
//! dua --all --json .
//! ```

mod cli;

use std::io::{self, BufWriter, Write};
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use dua::{FileConfig, Scanner, output::JsonOutput, selector::top_n};

/// Entry point for the dua application.
///
/// Argument errors exit with status 1 (help and version requests with 0).
/// Any other error is printed to stderr by way of [`inner_main`] and also
/// exits with status 1.
fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            exit(code);
        }
    };

    if let Err(err) = inner_main(&args) {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Loads the config file, builds the tree, selects the top entries, and
/// prints them as lines or as one JSON document.
///
/// # Errors
///
/// Returns errors from option validation, a fatal scan failure, JSON
/// serialization, or writing to stdout.
fn inner_main(args: &Cli) -> Result<()> {
    let file_config = load_config();
    let select_options = args.select_options(&file_config)?;
    let scan_options = args.scan_options(&file_config);

    let scanner = Scanner::new(scan_options).with_quiet(args.json());
    let scan = scanner.build(args.directory())?;
    let top = top_n(&scan.root, &select_options);

    let mut out = BufWriter::new(io::stdout().lock());

    if args.json() {
        let output = JsonOutput::new(&scan.root, &top, &select_options, &scan.errors);
        serde_json::to_writer_pretty(&mut out, &output)?;
        writeln!(out)?;
    } else {
        for node in top {
            writeln!(out, "{node}")?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
