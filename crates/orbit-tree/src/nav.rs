#![forbid(unsafe_code)]

//! Navigation state machine.
//!
//! The state is the id path to the active node plus an optional selected
//! leaf among the active node's children. Three transitions mutate it:
//!
//! ```text
//!   drill_down(c), c has children   path.push(c)      leaf = None
//!   drill_down(c), c is a leaf      path unchanged    leaf = toggle(c)
//!   go_back()                       path.pop()        leaf = None   (no-op at root)
//!   jump_to(k)                      path.truncate(k)  leaf = None
//! ```
//!
//! Any change to `path` clears the selected leaf.

use crate::lookup::find_node;
use crate::node::TreeNode;
use crate::tree::Tree;

/// Outcome of a navigation transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A non-leaf child became the active node.
    Descended {
        /// Id of the new active node.
        id: String,
    },
    /// A leaf child was selected (replacing any previous selection).
    LeafSelected {
        /// Id of the selected leaf.
        id: String,
    },
    /// The selected leaf was activated again and deselected.
    LeafCleared {
        /// Id of the deselected leaf.
        id: String,
    },
    /// The active node moved to its parent.
    Ascended {
        /// Id of the node that was active before.
        from: String,
    },
    /// The path was truncated to a breadcrumb depth.
    Jumped {
        /// New path length.
        depth: usize,
    },
    /// Nothing changed.
    Ignored,
}

impl Transition {
    /// Whether this transition changed `path`.
    #[must_use]
    pub fn changed_path(&self) -> bool {
        matches!(
            self,
            Self::Descended { .. } | Self::Ascended { .. } | Self::Jumped { .. }
        )
    }
}

/// Path from the root to the active node, plus the selected leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    path: Vec<String>,
    selected_leaf: Option<String>,
}

impl NavigationState {
    /// Root active, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids from the root's child down to the active node.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Id of the selected leaf child, if any.
    #[must_use]
    pub fn selected_leaf(&self) -> Option<&str> {
        self.selected_leaf.as_deref()
    }

    /// Depth of the active node (root = 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Whether the root is the active node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The active node, or `None` if the path no longer resolves.
    #[must_use]
    pub fn active_node<'a>(&self, tree: &'a Tree) -> Option<&'a TreeNode> {
        find_node(tree, &self.path)
    }

    /// The selected leaf node, if any and still present.
    #[must_use]
    pub fn selected_leaf_node<'a>(&self, tree: &'a Tree) -> Option<&'a TreeNode> {
        let id = self.selected_leaf.as_deref()?;
        self.active_node(tree)?.child_by_id(id)
    }

    /// Activate the child `child_id` of the active node.
    ///
    /// Children with children are entered; leaves toggle the selection.
    /// Ids that are not children of the active node are ignored.
    pub fn drill_down(&mut self, tree: &Tree, child_id: &str) -> Transition {
        let Some(active) = self.active_node(tree) else {
            orbit_core::warn!(path = ?self.path, "active path does not resolve");
            return Transition::Ignored;
        };
        let Some(child) = active.child_by_id(child_id) else {
            orbit_core::debug!(child_id, "drill_down target is not a child of the active node");
            return Transition::Ignored;
        };

        let transition = if child.is_leaf() {
            if self.selected_leaf.as_deref() == Some(child_id) {
                self.selected_leaf = None;
                Transition::LeafCleared {
                    id: child_id.to_string(),
                }
            } else {
                self.selected_leaf = Some(child_id.to_string());
                Transition::LeafSelected {
                    id: child_id.to_string(),
                }
            }
        } else {
            self.path.push(child_id.to_string());
            self.selected_leaf = None;
            Transition::Descended {
                id: child_id.to_string(),
            }
        };
        orbit_core::debug!(?transition, depth = self.path.len(), "navigation");
        transition
    }

    /// Activate the child at `index` among the active node's children.
    pub fn activate_child(&mut self, tree: &Tree, index: usize) -> Transition {
        let id = self
            .active_node(tree)
            .and_then(|n| n.children().get(index))
            .map(|c| c.id().to_string());
        match id {
            Some(id) => self.drill_down(tree, &id),
            None => Transition::Ignored,
        }
    }

    /// Move to the parent of the active node. No-op at the root.
    pub fn go_back(&mut self) -> Transition {
        let Some(from) = self.path.pop() else {
            return Transition::Ignored;
        };
        self.selected_leaf = None;
        let transition = Transition::Ascended { from };
        orbit_core::debug!(?transition, depth = self.path.len(), "navigation");
        transition
    }

    /// Truncate the path to its first `depth` elements and clear the leaf.
    ///
    /// `depth >= path.len()` keeps the path and only clears the leaf.
    pub fn jump_to(&mut self, depth: usize) -> Transition {
        let cleared = self.selected_leaf.take();
        let transition = if depth < self.path.len() {
            self.path.truncate(depth);
            Transition::Jumped { depth }
        } else {
            match cleared {
                Some(id) => Transition::LeafCleared { id },
                None => return Transition::Ignored,
            }
        };
        orbit_core::debug!(?transition, depth = self.path.len(), "navigation");
        transition
    }

    /// Replace the whole state. Used by snapshot restore.
    pub(crate) fn replace(&mut self, path: Vec<String>, selected_leaf: Option<String>) {
        self.path = path;
        self.selected_leaf = selected_leaf;
    }
}
