//! Top-N selection over a scanned tree.
//!
//! Each directory is either reported as a single unit or, when one of its
//! children dominates it, replaced by that child's own candidates. Every
//! child contributes its candidates either way; the dominance test only
//! decides whether the directory itself is a candidate.
//!
//! Candidates are collected unsorted at every level. Only the top-level call
//! sorts them by total, largest first, and truncates to the limit.

use std::cmp::Reverse;

use crate::{config::SelectOptions, tree::Node};

/// Select the largest nodes under `root`.
///
/// Returns at most `options.limit` nodes (all candidates when the limit is
/// 0), sorted by total size in descending order. Ties keep the order in which
/// candidates were collected: children before their parent, siblings in
/// directory enumeration order.
///
/// # Examples
///
/// ```
/// # use dua::{config::SelectOptions, selector::top_n, tree::Node};
/// let root = Node::directory(
///     "/a",
///     vec![Node::file("/a/big", 1000), Node::file("/a/small", 10)],
/// );
/// let top = top_n(&root, &SelectOptions::default());
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[0].total(), 1000);
/// ```
#[must_use]
pub fn top_n<'a>(root: &'a Node, options: &SelectOptions) -> Vec<&'a Node> {
    let mut top = Vec::new();
    collect_candidates(root, options.threshold, &mut top);

    top.sort_by_key(|node| Reverse(node.total()));

    if options.limit > 0 {
        top.truncate(options.limit);
    }

    top
}

/// Append the candidates of `node`'s subtree to `out`, unsorted.
///
/// Every child's candidates are collected. `node` itself is appended last,
/// unless some child is dominant (see [`is_dominant`]).
pub fn collect_candidates<'a>(node: &'a Node, threshold: f64, out: &mut Vec<&'a Node>) {
    let total = node.total();
    let mut include_self = true;

    for child in node.children() {
        if is_dominant(child.total(), total, threshold) {
            include_self = false;
        }
        collect_candidates(child, threshold, out);
    }

    if include_self {
        out.push(node);
    }
}

/// Whether a child of `child_total` bytes dominates a parent of
/// `parent_total` bytes.
///
/// The comparison is strict: a child holding exactly `threshold` of its
/// parent does not dominate it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_dominant(child_total: u64, parent_total: u64, threshold: f64) -> bool {
    child_total as f64 > parent_total as f64 * threshold
}

/// Whether `node` is replaced by a dominant child instead of being reported.
#[must_use]
pub fn is_exploded(node: &Node, threshold: f64) -> bool {
    let total = node.total();
    node.children()
        .iter()
        .any(|child| is_dominant(child.total(), total, threshold))
}

/// Number of candidates in `node`'s subtree, before any truncation.
///
/// Every node is a candidate except the exploded ones.
#[must_use]
pub fn candidate_count(node: &Node, threshold: f64) -> usize {
    node.iter_preorder()
        .filter(|n| !is_exploded(n, threshold))
        .count()
}

/// Number of directories in `node`'s subtree replaced by a dominant child.
#[must_use]
pub fn exploded_count(node: &Node, threshold: f64) -> usize {
    node.iter_preorder()
        .filter(|n| is_exploded(n, threshold))
        .count()
}
