//! # dua
//!
//! A disk usage analyzer: it scans a directory and reports the files and
//! directories taking up the most space, as a short "top N" list.
//!
//! A directory is reported as a single unit unless one of its children holds
//! more than a threshold share of its total (90% by default). In that case the
//! directory gives way to its children, which compete for the top slots on
//! their own.
//!
//! ## Main Parts
//!
//! - [`scanner`] - Builds the in-memory tree from the filesystem
//! - [`tree`] - The tree nodes and their memoized totals
//! - [`selector`] - The top-N inclusion heuristic
//! - [`config`] - Scan and selection options, config file
//! - [`output`] - JSON output
//! - [`utils`] - Size formatting

pub mod config;
pub mod output;
pub mod scanner;
pub mod selector;
pub mod tree;
pub mod utils;

pub use config::{FileConfig, FileErrorPolicy, ScanOptions, SelectOptions};
pub use scanner::{Scan, ScanError, Scanner};
pub use selector::top_n;
pub use tree::{Node, NodeKind};
