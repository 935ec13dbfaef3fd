#![forbid(unsafe_code)]

//! Tree nodes.
//!
//! # Example
//!
//! ```
//! use orbit_tree::{Color, TreeNode};
//!
//! let root = TreeNode::new("me", "Portfolio")
//!     .with_color(Color::rgb(0x22, 0x22, 0x88))
//!     .child(TreeNode::new("research", "Research")
//!         .child(TreeNode::new("interviews", "Interviews")))
//!     .child(TreeNode::new("contact", "Contact"));
//!
//! assert_eq!(root.children().len(), 2);
//! assert!(root.child_by_id("contact").unwrap().is_leaf());
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::text::LocalizedText;

/// A node of the drill-down tree.
///
/// Nodes own their children; there are no parent links. A node with no
/// children is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    id: String,
    label: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node. `label` may be a plain `&str` (default locale) or a
    /// full [`LocalizedText`].
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<LocalizedText>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            color: None,
            children: Vec::new(),
        }
    }

    /// Builder: set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<LocalizedText>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder: append a child.
    #[must_use]
    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }

    /// Builder: replace the children.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<TreeNode>) -> Self {
        self.children = nodes;
        self
    }

    /// Identifier, unique among siblings.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Localized label.
    #[must_use]
    pub fn label(&self) -> &LocalizedText {
        &self.label
    }

    /// Localized description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&LocalizedText> {
        self.description.as_ref()
    }

    /// Own color, if any (not inherited).
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Children in authored order.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find a direct child by id.
    #[must_use]
    pub fn child_by_id(&self, id: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Total number of nodes in this subtree, including this one.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_len).sum::<usize>()
    }
}
