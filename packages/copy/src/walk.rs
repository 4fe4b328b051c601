//! Recursive file enumeration using jwalk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use crate::error::CopyError;

/// Build the walker shared by enumeration, counting and tree copies.
///
/// Entries are sorted by name and the walk stays on the calling thread,
/// so every traversal of the same directory yields the same order.
pub(crate) fn walker(root: &Path) -> WalkDir {
    WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(Parallelism::Serial)
}

/// Whether a walked entry is a symlink resolving to a directory.
///
/// Such links are never descended into and never copied.
pub(crate) fn is_directory_link(path: &Path, file_type: FileType) -> bool {
    file_type.is_symlink() && path.is_dir()
}

/// Enumerate every non-directory entry below `root`.
///
/// Regular files and symlinks to files are returned as full paths
/// (`root` joined with the relative location). Directories are not
/// returned; they are implied by the files inside them. Symlinks to
/// directories are skipped. A `root` that is itself a file yields
/// nothing.
///
/// # Errors
///
/// * If `root` does not exist
/// * If any directory below `root` cannot be read
pub fn enumerate_files(root: &Path) -> Result<Vec<PathBuf>, CopyError> {
    log::debug!("Enumerating files in {}", root.display());

    fs::symlink_metadata(root).map_err(|e| CopyError::MetadataError {
        path: root.to_path_buf(),
        io_error: e,
    })?;

    let mut files = Vec::new();

    for entry in walker(root) {
        let entry = entry.map_err(|e| CopyError::EnumerationError {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if entry.depth == 0 || entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if is_directory_link(&path, entry.file_type()) {
            log::debug!("Skipping directory symlink {}", path.display());
            continue;
        }

        files.push(path);
    }

    log::debug!("Found {} files in {}", files.len(), root.display());

    Ok(files)
}
