//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how the tree builder reacts
//! to failures while walking a directory.

/// What to do when the metadata of a regular file cannot be read.
///
/// Failures to list a directory are always recoverable: the directory is kept
/// with whatever entries were gathered. File metadata failures abort the whole
/// scan by default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FileErrorPolicy {
    /// Report the failure and abort the scan
    #[default]
    Abort,

    /// Report the failure, count the file as zero bytes, and keep going
    Skip,
}

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// How to handle file metadata failures
    pub on_file_error: FileErrorPolicy,
}

impl ScanOptions {
    /// Options that degrade gracefully on every I/O failure.
    #[must_use]
    pub const fn keep_going() -> Self {
        Self {
            on_file_error: FileErrorPolicy::Skip,
        }
    }
}
