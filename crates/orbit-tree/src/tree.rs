#![forbid(unsafe_code)]

//! The validated tree and its loaders.
//!
//! A [`Tree`] can only be built from a root that defines a color and whose
//! descendants have non-empty, sibling-unique ids. Every lookup in this
//! crate relies on those two facts.

use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;

use crate::color::Color;
use crate::error::TreeError;
use crate::node::TreeNode;

/// An immutable, validated drill-down tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: TreeNode,
    root_color: Color,
}

impl Tree {
    /// Validate `root` and wrap it.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingRootColor`], [`TreeError::EmptyId`], or
    /// [`TreeError::DuplicateId`].
    pub fn new(root: TreeNode) -> Result<Self, TreeError> {
        let root_color = root.color().ok_or(TreeError::MissingRootColor)?;
        let mut path = Vec::new();
        validate_children(&root, &mut path)?;
        orbit_core::debug!(nodes = root.subtree_len(), "tree validated");
        Ok(Self { root, root_color })
    }

    /// Parse and validate a tree from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, TreeError> {
        let root: TreeNode = serde_json::from_str(json)?;
        Self::new(root)
    }

    /// Parse and validate a tree from a JSON reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, TreeError> {
        let root: TreeNode = serde_json::from_reader(reader)?;
        Self::new(root)
    }

    /// Read, parse, and validate a tree from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).inspect_err(|_err| {
            orbit_core::warn!(path = %path.display(), error = %_err, "cannot open tree file");
        })?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Serialize back to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// The root's color, which every color lookup starts from.
    #[must_use]
    pub fn root_color(&self) -> Color {
        self.root_color
    }

    /// Depth-first, pre-order walk over every node with its id path.
    ///
    /// The root is yielded first with an empty path.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(Vec::new(), &self.root)],
        }
    }

    /// Every locale code used by any label or description, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        let mut out = BTreeSet::new();
        for (_, node) in self.walk() {
            out.extend(node.label().locales().map(str::to_string));
            if let Some(desc) = node.description() {
                out.extend(desc.locales().map(str::to_string));
            }
        }
        out.into_iter().collect()
    }
}

fn validate_children(node: &TreeNode, path: &mut Vec<String>) -> Result<(), TreeError> {
    let mut seen = HashSet::with_capacity(node.children().len());
    for child in node.children() {
        if child.id().is_empty() {
            return Err(TreeError::EmptyId {
                parent: path.clone(),
            });
        }
        if !seen.insert(child.id()) {
            return Err(TreeError::DuplicateId {
                parent: path.clone(),
                id: child.id().to_string(),
            });
        }
        path.push(child.id().to_string());
        validate_children(child, path)?;
        path.pop();
    }
    Ok(())
}

/// Iterator returned by [`Tree::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(Vec<String>, &'a TreeNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Vec<String>, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for child in node.children().iter().rev() {
            let mut child_path = path.clone();
            child_path.push(child.id().to_string());
            self.stack.push((child_path, child));
        }
        Some((path, node))
    }
}
