//! Directory scanning and tree construction.
//!
//! This module walks a directory depth-first and builds the in-memory
//! [`Node`] tree that mirrors it. The walk is single-threaded and synchronous.
//! Each directory handle is released before descending into the entries it
//! listed, so deep or wide trees never hold more than one handle open.
//!
//! Failures are reported on stderr as they happen. Directory failures leave a
//! partial subtree and the walk continues; file metadata failures abort the
//! scan unless [`FileErrorPolicy::Skip`] is configured.

use std::{
    fs::{self, FileType, ReadDir},
    io,
    path::{Path, PathBuf},
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use crate::{
    config::{FileErrorPolicy, ScanOptions},
    tree::{Node, NodeKind},
};

/// An I/O failure encountered while building the tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory could not be opened or its listing could not be read.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    /// The type of a directory entry could not be determined.
    #[error("cannot determine type of {}: {source}", path.display())]
    FileType { path: PathBuf, source: io::Error },

    /// The metadata (size) of a regular file could not be read.
    #[error("cannot read metadata of {}: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },
}

impl ScanError {
    /// Path of the entry the failure relates to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. } | Self::FileType { path, .. } | Self::Metadata { path, .. } => {
                path
            }
        }
    }

    /// Whether this failure aborts the whole scan under `policy`.
    ///
    /// Only file metadata failures can be fatal, and only under
    /// [`FileErrorPolicy::Abort`]. A failure to list the scan root is handled
    /// separately by [`Scanner::build`].
    #[must_use]
    pub const fn is_fatal(&self, policy: FileErrorPolicy) -> bool {
        matches!(
            (self, policy),
            (Self::Metadata { .. }, FileErrorPolicy::Abort)
        )
    }
}

/// Result of a completed scan.
#[derive(Debug)]
pub struct Scan {
    /// Root of the built tree. Subtrees whose directories failed to list are
    /// partial.
    pub root: Node,

    /// Every recoverable failure that was reported during the walk, in the
    /// order it happened.
    pub errors: Vec<ScanError>,
}

/// Directory scanner that builds the size tree.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

/// State threaded through a single walk.
struct Walk {
    progress: ProgressBar,
    errors: Vec<ScanError>,
    entries: usize,
}

impl Walk {
    fn new(quiet: bool) -> Self {
        let progress = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
                pb.set_style(style);
            }
            pb.set_message("Scanning...");
            pb
        };

        Self {
            progress,
            errors: Vec::new(),
            entries: 0,
        }
    }

    /// Print a recoverable failure and remember it.
    fn report(&mut self, error: ScanError) {
        self.progress
            .suspend(|| eprintln!("{}", error.to_string().red()));
        self.errors.push(error);
    }

    fn count(&mut self, listed: usize) {
        self.entries += listed;
        self.progress
            .set_message(format!("Scanning... {} entries", self.entries));
    }
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dua::{config::ScanOptions, scanner::Scanner};
    /// let scanner = Scanner::new(ScanOptions::default());
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    ///
    /// When quiet mode is active the scanning spinner is hidden, which is
    /// required for `--json` output. Failures are still reported on stderr.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the tree rooted at `root`.
    ///
    /// The root is classified as a directory once it has been opened. Every
    /// entry below it is classified from its directory entry type without
    /// following symlinks: directories are walked recursively, regular files
    /// get their byte length, anything else is recorded as
    /// [`NodeKind::Other`].
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ReadDir`] if `root` cannot be opened as a
    /// directory, and [`ScanError::Metadata`] if a file's size cannot be read
    /// while the policy is [`FileErrorPolicy::Abort`]. Other failures are
    /// reported, collected in [`Scan::errors`], and leave partial subtrees.
    pub fn build(&self, root: &Path) -> Result<Scan, ScanError> {
        let entries = fs::read_dir(root).map_err(|source| ScanError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;

        let mut walk = Walk::new(self.quiet);

        let mut node = Node::new(root).with_kind(NodeKind::Directory);
        let result = self.fill(&mut node, entries, &mut walk);
        walk.progress.finish_and_clear();
        result?;

        Ok(Scan {
            root: node,
            errors: walk.errors,
        })
    }

    /// Open `node`'s directory and add its entries; listing failures are
    /// reported and leave `node` partial.
    fn walk_dir(&self, node: &mut Node, walk: &mut Walk) -> Result<(), ScanError> {
        match fs::read_dir(node.path()) {
            Ok(entries) => self.fill(node, entries, walk),
            Err(source) => {
                walk.report(ScanError::ReadDir {
                    path: node.path().to_path_buf(),
                    source,
                });
                Ok(())
            }
        }
    }

    /// Consume a directory listing, then classify and add each entry.
    fn fill(&self, node: &mut Node, entries: ReadDir, walk: &mut Walk) -> Result<(), ScanError> {
        let listed = Self::list(node.path(), entries, walk);
        walk.count(listed.len());

        for (path, file_type) in listed {
            let child = self.visit(path, file_type, walk)?;
            node.push_child(child);
        }

        Ok(())
    }

    /// Drain `entries` into owned paths and types.
    ///
    /// The handle is dropped on return. A failure mid-listing is reported and
    /// ends the listing; entries read before it are kept.
    fn list(dir: &Path, entries: ReadDir, walk: &mut Walk) -> Vec<(PathBuf, io::Result<FileType>)> {
        let mut listed = Vec::new();

        for entry in entries {
            match entry {
                Ok(entry) => listed.push((dir.join(entry.file_name()), entry.file_type())),
                Err(source) => {
                    walk.report(ScanError::ReadDir {
                        path: dir.to_path_buf(),
                        source,
                    });
                    break;
                }
            }
        }

        listed
    }

    /// Build the node for a single entry.
    fn visit(
        &self,
        path: PathBuf,
        file_type: io::Result<FileType>,
        walk: &mut Walk,
    ) -> Result<Node, ScanError> {
        let file_type = match file_type {
            Ok(file_type) => file_type,
            Err(source) => {
                walk.report(ScanError::FileType {
                    path: path.clone(),
                    source,
                });
                return Ok(Node::new(path));
            }
        };

        if file_type.is_dir() {
            let mut child = Node::new(path).with_kind(NodeKind::Directory);
            self.walk_dir(&mut child, walk)?;
            Ok(child)
        } else if file_type.is_file() {
            self.visit_file(path, walk)
        } else {
            Ok(Node::new(path).with_kind(NodeKind::Other))
        }
    }

    /// Read a regular file's size, applying the configured failure policy.
    fn visit_file(&self, path: PathBuf, walk: &mut Walk) -> Result<Node, ScanError> {
        match fs::symlink_metadata(&path) {
            Ok(metadata) => Ok(Node::file(path, metadata.len())),
            Err(source) => {
                let error = ScanError::Metadata {
                    path: path.clone(),
                    source,
                };

                if error.is_fatal(self.scan_options.on_file_error) {
                    return Err(error);
                }

                walk.report(error);
                Ok(Node::file(path, 0))
            }
        }
    }
}
