//! Error types for tree path accessors.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Errors raised by [`crate::StructuralTree`] path accessors.
///
/// Both variants signal a contract violation at the call site rather
/// than a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The segment path was empty.
    #[error("Invalid tree path: a path needs at least one segment")]
    InvalidPath,

    /// A segment along the path is missing, or a leaf sits where a
    /// subtree was expected.
    #[error("Tree path not found: {}", path.join("/"))]
    PathNotFound {
        /// The full segment path that was requested.
        path: Vec<String>,
    },
}

impl TreeError {
    pub(crate) fn not_found<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::PathNotFound {
            path: segments.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}
