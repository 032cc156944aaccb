//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, these structures are serialized to
//! stdout as a single JSON object, replacing the line output.

use humansize::{BINARY, format_size};
use serde::Serialize;

use crate::{
    config::SelectOptions,
    scanner::ScanError,
    selector::{candidate_count, exploded_count},
    tree::{Node, NodeKind},
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The scanned directory, as given.
    pub root: String,

    /// Dominance threshold used for the selection.
    pub threshold: f64,

    /// Maximum number of entries (0 = no limit).
    pub limit: usize,

    /// Total size of the scanned directory in bytes.
    pub total_size: u64,

    /// Human-readable formatted total size (e.g. `"1.23 GiB"`).
    pub total_size_formatted: String,

    /// Number of candidates before the limit was applied.
    pub candidates: usize,

    /// Number of directories replaced by a dominant child.
    pub exploded_directories: usize,

    /// Selected entries, largest first.
    pub entries: Vec<JsonEntry>,

    /// Recoverable failures reported during the scan.
    pub errors: Vec<String>,
}

/// A single selected entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonEntry {
    /// Path of the file or directory.
    pub path: String,

    /// `"file"`, `"directory"`, `"other"` or `"unknown"`.
    pub kind: NodeKind,

    /// Total size in bytes.
    pub size: u64,

    /// Human-readable formatted size.
    pub size_formatted: String,
}

impl JsonOutput {
    /// Build the document for a completed selection.
    #[must_use]
    pub fn new(
        root: &Node,
        entries: &[&Node],
        options: &SelectOptions,
        errors: &[ScanError],
    ) -> Self {
        let total_size = root.total();

        Self {
            root: root.path().display().to_string(),
            threshold: options.threshold,
            limit: options.limit,
            total_size,
            total_size_formatted: format_size(total_size, BINARY),
            candidates: candidate_count(root, options.threshold),
            exploded_directories: exploded_count(root, options.threshold),
            entries: entries.iter().map(|node| JsonEntry::from_node(node)).collect(),
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

impl JsonEntry {
    /// Convert a `Node` into a `JsonEntry`.
    #[must_use]
    pub fn from_node(node: &Node) -> Self {
        Self {
            path: node.path().display().to_string(),
            kind: node.kind(),
            size: node.total(),
            size_formatted: format_size(node.total(), BINARY),
        }
    }
}
