#![forbid(unsafe_code)]

//! Breadcrumb trail from the root to the active node.

use crate::lookup::resolve_prefix;
use crate::tree::Tree;

/// One breadcrumb entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crumb<'a> {
    /// Node id.
    pub id: &'a str,
    /// Label in the requested locale.
    pub label: &'a str,
    /// Path length that makes this node active (root = 0).
    pub depth: usize,
}

/// Root-first breadcrumbs for `path`, labels in `locale`.
///
/// Stops at the first segment that does not resolve, so a valid path
/// yields `path.len() + 1` entries.
#[must_use]
pub fn breadcrumbs<'a, S: AsRef<str>>(tree: &'a Tree, path: &[S], locale: &str) -> Vec<Crumb<'a>> {
    resolve_prefix(tree, path)
        .into_iter()
        .enumerate()
        .map(|(depth, node)| Crumb {
            id: node.id(),
            label: node.label().get(locale),
            depth,
        })
        .collect()
}
