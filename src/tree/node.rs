//! Core tree data structures.
//!
//! This module defines the in-memory mirror of a scanned directory: one
//! [`Node`] per filesystem entry, each owning its children. Totals are
//! computed lazily and memoized exactly once per node.

use std::{
    cell::OnceCell,
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::utils::format_bytes;

/// Classification of a filesystem entry.
///
/// Entries are classified from their directory entry type, without following
/// symbolic links.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Regular file; the only kind that carries its own size.
    File,

    /// Directory; its size is the sum of its children.
    Directory,

    /// Symlink, device, socket, fifo or any other special entry.
    Other,

    /// Not classified (yet), or the entry type could not be determined.
    #[default]
    Unknown,
}

impl NodeKind {
    /// Single-character marker used in the line output.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::File => 'f',
            Self::Directory => 'd',
            Self::Other => '?',
            Self::Unknown => ' ',
        }
    }
}

/// One filesystem entry in the scanned tree.
///
/// A node exclusively owns its children, stored in directory enumeration
/// order. Nothing is mutated after the build phase except the write-once
/// total.
#[derive(Debug, Clone)]
pub struct Node {
    path: PathBuf,
    kind: NodeKind,
    own_size: u64,
    total: OnceCell<u64>,
    children: Vec<Self>,
}

impl Node {
    /// Create an unclassified node with no size and no children.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::Unknown,
            own_size: 0,
            total: OnceCell::new(),
            children: Vec::new(),
        }
    }

    /// Create a regular file node of `size` bytes.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>, size: u64) -> Self {
        Self::new(path).with_kind(NodeKind::File).with_own_size(size)
    }

    /// Create a directory node owning `children`.
    #[must_use]
    pub fn directory(path: impl Into<PathBuf>, children: Vec<Self>) -> Self {
        let mut node = Self::new(path).with_kind(NodeKind::Directory);
        node.children = children;
        node
    }

    /// Create a special entry (symlink, device, ...) node.
    #[must_use]
    pub fn other(path: impl Into<PathBuf>) -> Self {
        Self::new(path).with_kind(NodeKind::Other)
    }

    #[must_use]
    pub(crate) const fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub(crate) const fn with_own_size(mut self, size: u64) -> Self {
        self.own_size = size;
        self
    }

    pub(crate) fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Bytes directly attributable to this node (nonzero only for files).
    #[must_use]
    pub const fn own_size(&self) -> u64 {
        self.own_size
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Recursive total size in bytes.
    ///
    /// The first call walks the subtree depth-first and caches every total
    /// it computes; later calls return the cached value, including when the
    /// total is legitimately zero.
    #[must_use]
    pub fn total(&self) -> u64 {
        *self.total.get_or_init(|| {
            self.children
                .iter()
                .fold(self.own_size, |acc, child| acc.saturating_add(child.total()))
        })
    }

    /// Whether the total has already been computed.
    #[cfg(test)]
    pub(crate) fn is_total_computed(&self) -> bool {
        self.total.get().is_some()
    }

    /// Number of nodes in this subtree, including `self`.
    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first, pre-order iterator over this subtree.
    pub fn iter_preorder(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

impl Display for Node {
    /// Render as `<formatted size> [<kind-marker>] <path>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            format_bytes(self.total()),
            self.kind.marker(),
            self.path.display()
        )
    }
}
