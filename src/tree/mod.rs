//! In-memory representation of a scanned directory tree.
//!
//! ## Main Parts
//!
//! - [`Node`] - One filesystem entry, owning its children
//! - [`NodeKind`] - File, directory, other or unknown classification

pub mod node;

pub use node::{Node, NodeKind};
