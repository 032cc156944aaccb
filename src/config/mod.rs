//! Configuration types for scanning and selection.
//!
//! - [`scan`] - How the tree builder reacts to I/O failures
//! - [`select`] - Threshold and result limit for the top-N report
//! - [`file`] - Persistent settings from `config.toml`

pub mod file;
pub mod scan;
pub mod select;

pub use file::FileConfig;
pub use scan::{FileErrorPolicy, ScanOptions};
pub use select::{DEFAULT_THRESHOLD, DEFAULT_TOP, SelectOptions};
