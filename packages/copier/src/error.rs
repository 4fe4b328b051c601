//! Error types for scheduling and execution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scheduling or executing copies.
#[derive(Debug, Error)]
pub enum CopierError {
    /// The source passed to `copy` is not an existing directory.
    #[error("Source directory not found: {}", path.display())]
    SourceNotFound {
        /// The requested source directory.
        path: PathBuf,
    },

    /// A scheduled path cannot be represented as UTF-8.
    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },

    /// `copy` was called after the plan was merged.
    #[error("Cannot schedule more copies once the plan has been merged")]
    AlreadyMerged,

    /// Path index error.
    #[error("Path index error: {0}")]
    TreeError(#[from] copy_merge_tree::TreeError),

    /// Filesystem error.
    #[error("Filesystem error: {0}")]
    CopyError(#[from] copy_merge_copy::CopyError),
}
