#![forbid(unsafe_code)]

//! Orbit public facade crate.
//!
//! Re-exports the tree model, the navigator widget, and the rendering and
//! terminal pieces needed to drive it, plus a prelude.
//!
//! # Example
//!
//! ```
//! use orbit::prelude::*;
//!
//! let tree = Tree::from_json_str(r##"{
//!     "id": "me", "label": {"en": "Me"}, "color": "#223366",
//!     "children": [{"id": "work", "label": {"en": "Work"}}]
//! }"##)?;
//!
//! let mut state = NavigatorState::new();
//! let mut frame = Frame::new(40, 16);
//! Navigator::new(&tree).render(frame.bounds(), &mut frame, &mut state);
//! assert!(frame.buffer.to_text().contains("Work"));
//! # Ok::<(), orbit::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use orbit_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use orbit_core::geometry::{Rect, Sides};
pub use orbit_core::locale::{DEFAULT_LOCALE, Locale, LocaleContext};
#[cfg(not(target_arch = "wasm32"))]
pub use orbit_core::terminal_session::{SessionOptions, TerminalSession};

// --- Render re-exports -----------------------------------------------------

pub use orbit_render::{Buffer, Cell, Frame, HitId, HitRegion, PackedRgba, Style, StyleFlags};
#[cfg(not(target_arch = "wasm32"))]
pub use orbit_render::presenter::Presenter;

// --- Tree re-exports -------------------------------------------------------

pub use orbit_tree::{
    Color, Crumb, LocalizedText, NavSnapshot, NavigationState, OrbitLayout, Transition, Tree,
    TreeError, TreeNode, breadcrumbs, find_node, resolve_color,
};

// --- Widget re-exports -----------------------------------------------------

pub use orbit_widgets::{NavResult, Navigator, NavigatorState, StatefulWidget, Widget};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Orbit apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// The tree could not be loaded.
    Tree(TreeError),
    /// Terminal error with message.
    Terminal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Tree(err) => write!(f, "{err}"),
            Self::Terminal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Tree(err) => Some(err),
            Self::Terminal(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<TreeError> for Error {
    fn from(err: TreeError) -> Self {
        Self::Tree(err)
    }
}

/// Standard result type for Orbit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Color, Error, Event, Frame, KeyCode, KeyEvent, LocalizedText, NavResult, NavigationState,
        Navigator, NavigatorState, Rect, Result, StatefulWidget, Transition, Tree, TreeNode,
        Widget,
    };

    pub use crate::{render, tree, widgets};
}

pub use orbit_core as core;
pub use orbit_render as render;
pub use orbit_tree as tree;
pub use orbit_widgets as widgets;
