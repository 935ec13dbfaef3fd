#![forbid(unsafe_code)]

//! Drill-down tree model for Orbit.
//!
//! A [`Tree`] is a validated, immutable hierarchy of [`TreeNode`]s. The
//! user's position in it is a [`NavigationState`]: an id path from the root
//! plus an optional selected leaf. Everything here is pure data; the
//! `orbit-widgets` crate turns it into pixels and input.
//!
//! # Example
//!
//! ```
//! use orbit_tree::{breadcrumbs, Color, NavigationState, Transition, Tree, TreeNode};
//!
//! let tree = Tree::new(
//!     TreeNode::new("me", "Me")
//!         .with_color(Color::rgb(0x30, 0x30, 0x90))
//!         .child(TreeNode::new("work", "Work").child(TreeNode::new("atlas", "Atlas"))),
//! )
//! .unwrap();
//!
//! let mut nav = NavigationState::new();
//! assert_eq!(nav.drill_down(&tree, "work"), Transition::Descended { id: "work".into() });
//! nav.drill_down(&tree, "atlas");
//! assert_eq!(nav.selected_leaf(), Some("atlas"));
//!
//! let trail: Vec<&str> = breadcrumbs(&tree, nav.path(), "en").iter().map(|c| c.label).collect();
//! assert_eq!(trail, ["Me", "Work"]);
//! ```

pub mod breadcrumb;
pub mod color;
pub mod error;
pub mod lookup;
pub mod nav;
pub mod node;
pub mod orbit;
pub mod snapshot;
pub mod text;
pub mod tree;

pub use breadcrumb::{Crumb, breadcrumbs};
pub use color::{Color, ColorParseError};
pub use error::TreeError;
pub use lookup::{find_node, path_where, resolve_child_color, resolve_color, resolve_prefix};
pub use nav::{NavigationState, Transition};
pub use node::TreeNode;
pub use orbit::{CENTER_DIAMETER, ChildSize, ORBIT_RADIUS, OrbitLayout, OrbitPosition, orbit_angle};
pub use snapshot::NavSnapshot;
pub use text::LocalizedText;
pub use tree::{Tree, Walk};
