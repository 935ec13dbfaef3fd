#![forbid(unsafe_code)]

//! Errors raised while loading or validating a tree.
//!
//! Navigation itself never fails: unresolved paths are absorbed by
//! rendering less. Only tree construction reports errors.

use std::fmt;
use std::io;

/// Tree loading/validation error.
#[derive(Debug)]
pub enum TreeError {
    /// Reading the tree source failed.
    Io(io::Error),
    /// The tree source is not valid tree JSON (includes bad color strings).
    Json(serde_json::Error),
    /// The root node has no color, so nothing could inherit one.
    MissingRootColor,
    /// A node has an empty id.
    EmptyId {
        /// Path of the parent node (empty for the root's children).
        parent: Vec<String>,
    },
    /// Two siblings share an id.
    DuplicateId {
        /// Path of the parent node.
        parent: Vec<String>,
        /// The repeated id.
        id: String,
    },
}

fn fmt_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join("/")
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read tree: {err}"),
            Self::Json(err) => write!(f, "invalid tree json: {err}"),
            Self::MissingRootColor => write!(f, "root node must define a color"),
            Self::EmptyId { parent } => {
                write!(f, "node under {} has an empty id", fmt_path(parent))
            }
            Self::DuplicateId { parent, id } => {
                write!(f, "duplicate id {id:?} under {}", fmt_path(parent))
            }
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TreeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for TreeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_the_parent_path() {
        let err = TreeError::DuplicateId {
            parent: vec!["work".into(), "apps".into()],
            id: "atlas".into(),
        };
        assert_eq!(err.to_string(), "duplicate id \"atlas\" under work/apps");

        let err = TreeError::EmptyId { parent: vec![] };
        assert_eq!(err.to_string(), "node under <root> has an empty id");
    }

    #[test]
    fn io_error_is_the_source() {
        let err = TreeError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(TreeError::MissingRootColor.source().is_none());
    }
}
