#![forbid(unsafe_code)]

//! Serializable navigation snapshots.
//!
//! A snapshot can outlive the tree it was taken from (saved to disk, tree
//! edited, app restarted). Restoring therefore re-validates it against the
//! current tree and keeps only what still makes sense.

use serde::{Deserialize, Serialize};

use crate::nav::NavigationState;
use crate::tree::Tree;

/// Persistable copy of a [`NavigationState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSnapshot {
    /// Id path to the active node.
    #[serde(default)]
    pub path: Vec<String>,
    /// Selected leaf child of the active node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_leaf: Option<String>,
}

impl NavigationState {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            path: self.path().to_vec(),
            selected_leaf: self.selected_leaf().map(str::to_string),
        }
    }

    /// Rebuild a state from `snapshot`, validated against `tree`.
    ///
    /// The path is cut at the first segment that does not resolve or that
    /// names a leaf. The selected leaf survives only when the path was kept
    /// whole and the id is a leaf child of the restored active node.
    #[must_use]
    pub fn restore(tree: &Tree, snapshot: &NavSnapshot) -> Self {
        let mut node = tree.root();
        let mut path = Vec::with_capacity(snapshot.path.len());
        for id in &snapshot.path {
            match node.child_by_id(id) {
                Some(child) if !child.is_leaf() => {
                    path.push(id.clone());
                    node = child;
                }
                _ => break,
            }
        }

        let truncated = path.len() < snapshot.path.len();
        let selected_leaf = if truncated {
            None
        } else {
            snapshot
                .selected_leaf
                .as_deref()
                .filter(|id| node.child_by_id(id).is_some_and(|c| c.is_leaf()))
                .map(str::to_string)
        };

        if truncated {
            orbit_core::warn!(
                requested = snapshot.path.len(),
                kept = path.len(),
                "snapshot path truncated on restore"
            );
        }

        let mut state = Self::new();
        state.replace(path, selected_leaf);
        state
    }
}
