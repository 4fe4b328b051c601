//! Applying a planned operation to the filesystem.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;

use copy_merge_copy::{
    SYMLINKS_SUPPORTED, copy_file, copy_tree, create_symlink, prepare_parent, remove_entry,
    remove_tree,
};

use crate::error::CopierError;
use crate::operation::{Operation, OperationKind};

/// How an operation was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The target was created as a symlink to the source.
    Linked,
    /// The source was copied.
    Copied {
        /// Regular files written.
        files: u64,
    },
}

/// Execute a single planned operation.
///
/// The target's parent directory is created (replacing a plain file in
/// its way), anything already at the target is removed, and the target is
/// then linked or copied from the source. With `link` set on a platform
/// without symlink support the operation silently copies instead.
///
/// Nothing is rolled back on failure.
///
/// # Errors
///
/// * If the existing target cannot be removed
/// * If the copy or symlink fails
pub fn execute_operation(operation: &Operation, link: bool) -> Result<Applied, CopierError> {
    let source = operation.source();
    let target = operation.target();

    log::debug!("Executing {operation}");

    prepare_parent(target)?;

    if let Ok(metadata) = fs::symlink_metadata(target) {
        // symlink_metadata never reports a symlink as a directory
        if operation.kind() == OperationKind::Tree && metadata.is_dir() {
            remove_tree(target)?;
        } else {
            remove_entry(target)?;
        }
    }

    if link && SYMLINKS_SUPPORTED {
        create_symlink(source, target)?;
        return Ok(Applied::Linked);
    }

    let files = match operation.kind() {
        OperationKind::Tree => copy_tree(source, target)?,
        OperationKind::Single => {
            copy_file(source, target)?;
            1
        }
    };

    Ok(Applied::Copied { files })
}
