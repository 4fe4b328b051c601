//! Destination cleanup before an operation writes its target.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::CopyError;

/// Make sure the parent directory of `target` exists as a directory.
///
/// A plain file sitting where the parent directory should be is deleted
/// first. Missing directories are created recursively.
///
/// # Errors
///
/// * If the blocking file cannot be removed
/// * If the directory cannot be created
pub fn prepare_parent(target: &Path) -> Result<(), CopyError> {
    let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if parent.is_file() {
        log::debug!("Removing file in place of directory: {}", parent.display());
        remove_entry(parent)?;
    }

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| CopyError::CreateDirError {
            path: parent.to_path_buf(),
            io_error: e,
        })?;
    }

    Ok(())
}

/// Recursively remove the directory tree at `path`.
///
/// # Errors
///
/// * If the tree cannot be removed
pub fn remove_tree(path: &Path) -> Result<(), CopyError> {
    log::debug!("Removing directory tree: {}", path.display());

    fs::remove_dir_all(path).map_err(|e| CopyError::RemoveError {
        path: path.to_path_buf(),
        io_error: e,
    })
}

/// Remove the single filesystem entry at `path` (a file or a symlink).
///
/// Symlinks are removed themselves, never what they point to.
///
/// # Errors
///
/// * If `path` cannot be inspected or removed, including when it is a
///   non-empty real directory
pub fn remove_entry(path: &Path) -> Result<(), CopyError> {
    log::debug!("Removing: {}", path.display());

    let metadata = fs::symlink_metadata(path).map_err(|e| CopyError::MetadataError {
        path: path.to_path_buf(),
        io_error: e,
    })?;

    let result = if is_directory_entry(&metadata) {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };

    result.map_err(|e| CopyError::RemoveError {
        path: path.to_path_buf(),
        io_error: e,
    })
}

#[cfg(windows)]
fn is_directory_entry(metadata: &fs::Metadata) -> bool {
    use std::os::windows::fs::FileTypeExt;

    metadata.is_dir() || metadata.file_type().is_symlink_dir()
}

#[cfg(not(windows))]
fn is_directory_entry(metadata: &fs::Metadata) -> bool {
    metadata.is_dir()
}
