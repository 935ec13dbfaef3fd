#![forbid(unsafe_code)]

//! Path lookups over a [`Tree`].
//!
//! A path is the sequence of child ids from the root down to a node; the
//! empty path names the root. All lookups are total: a segment that does
//! not match any child ends the walk.

use crate::color::Color;
use crate::node::TreeNode;
use crate::tree::Tree;

/// Node at `path`, or `None` if any segment does not match a child id.
pub fn find_node<'a, S: AsRef<str>>(tree: &'a Tree, path: &[S]) -> Option<&'a TreeNode> {
    let mut current = tree.root();
    for segment in path {
        current = current.child_by_id(segment.as_ref())?;
    }
    Some(current)
}

/// Nodes visited along `path`, root first, stopping at the first segment
/// that does not resolve.
pub fn resolve_prefix<'a, S: AsRef<str>>(tree: &'a Tree, path: &[S]) -> Vec<&'a TreeNode> {
    let mut out = Vec::with_capacity(path.len() + 1);
    let mut current = tree.root();
    out.push(current);
    for segment in path {
        match current.child_by_id(segment.as_ref()) {
            Some(next) => {
                out.push(next);
                current = next;
            }
            None => {
                orbit_core::trace!(segment = segment.as_ref(), "path segment did not resolve");
                break;
            }
        }
    }
    out
}

/// Effective color of the node at `path`.
///
/// Walks the path tracking the last color defined, starting with the
/// root's. An unresolved segment stops the walk and the color found so
/// far is returned.
pub fn resolve_color<S: AsRef<str>>(tree: &Tree, path: &[S]) -> Color {
    resolve_prefix(tree, path)
        .iter()
        .filter_map(|node| node.color())
        .last()
        .unwrap_or(tree.root_color())
}

/// Effective color of the child `child_id` of the node at `path`.
///
/// Falls back to the parent's color when the child has none or does not
/// exist.
pub fn resolve_child_color<S: AsRef<str>>(tree: &Tree, path: &[S], child_id: &str) -> Color {
    let parent_color = resolve_color(tree, path);
    find_node(tree, path)
        .and_then(|n| n.child_by_id(child_id))
        .and_then(TreeNode::color)
        .unwrap_or(parent_color)
}

/// Id path to the first node (pre-order) satisfying `pred`.
pub fn path_where(tree: &Tree, mut pred: impl FnMut(&TreeNode) -> bool) -> Option<Vec<String>> {
    tree.walk()
        .find(|(_, node)| pred(node))
        .map(|(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: Color = Color::rgb(1, 1, 1);
    const WORK: Color = Color::rgb(2, 2, 2);
    const APPS: Color = Color::rgb(3, 3, 3);

    fn tree() -> Tree {
        Tree::new(
            TreeNode::new("root", "Root")
                .with_color(ROOT)
                .child(
                    TreeNode::new("work", "Work")
                        .with_color(WORK)
                        .child(
                            TreeNode::new("apps", "Apps")
                                .with_color(APPS)
                                .child(TreeNode::new("atlas", "Atlas")),
                        )
                        .child(TreeNode::new("web", "Web")),
                )
                .child(TreeNode::new("about", "About")),
        )
        .unwrap()
    }

    #[test]
    fn find_node_walks_ids() {
        let tree = tree();
        let empty: [&str; 0] = [];
        assert_eq!(find_node(&tree, &empty).map(TreeNode::id), Some("root"));
        assert_eq!(find_node(&tree, &["work", "apps"]).map(TreeNode::id), Some("apps"));
        assert!(find_node(&tree, &["work", "nope"]).is_none());
        assert!(find_node(&tree, &["apps"]).is_none());
    }

    #[test]
    fn resolve_color_inherits_nearest() {
        let tree = tree();
        assert_eq!(resolve_color(&tree, &["about"]), ROOT);
        assert_eq!(resolve_color(&tree, &["work", "web"]), WORK);
        assert_eq!(resolve_color(&tree, &["work", "apps", "atlas"]), APPS);
    }

    #[test]
    fn resolve_color_stops_at_unresolved_segment() {
        let tree = tree();
        assert_eq!(resolve_color(&tree, &["work", "ghost", "apps"]), WORK);
        assert_eq!(resolve_color(&tree, &["ghost"]), ROOT);
    }

    #[test]
    fn resolve_prefix_truncates() {
        let tree = tree();
        let ids: Vec<&str> = resolve_prefix(&tree, &["work", "x", "apps"])
            .iter()
            .map(|n| n.id())
            .collect();
        assert_eq!(ids, vec!["root", "work"]);
    }

    #[test]
    fn child_color_falls_back_to_parent() {
        let tree = tree();
        assert_eq!(resolve_child_color(&tree, &["work"], "apps"), APPS);
        assert_eq!(resolve_child_color(&tree, &["work"], "web"), WORK);
        assert_eq!(resolve_child_color(&tree, &["work"], "missing"), WORK);
    }

    #[test]
    fn path_where_finds_first_match() {
        let tree = tree();
        assert_eq!(
            path_where(&tree, |n| n.id() == "atlas"),
            Some(vec!["work".to_string(), "apps".to_string(), "atlas".to_string()])
        );
        assert_eq!(path_where(&tree, |n| n.id() == "zzz"), None);
    }
}
