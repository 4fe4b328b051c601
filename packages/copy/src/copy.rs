//! Sequential file and directory tree copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::CopyError;
use crate::walk::{is_directory_link, walker};

/// Copy a single file, trying reflink first then falling back to a regular
/// copy.
///
/// The target's parent directory must already exist. An existing target
/// file is overwritten by the regular copy path.
///
/// # Errors
///
/// * If the source cannot be read or the target cannot be written
pub fn copy_file(source: &Path, target: &Path) -> Result<(), CopyError> {
    // Try reflink first (copy-on-write, instant on APFS/Btrfs/ReFS)
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}

/// Copy a whole directory tree from `source` to `target`.
///
/// `target` is created, along with every directory below `source`
/// (including empty ones). Regular files and symlinks to files are
/// copied with [`copy_file`], so a link is written as the content it
/// points at. Symlinks to directories are skipped.
///
/// Returns the number of files copied.
///
/// # Errors
///
/// * If `source` cannot be enumerated
/// * If a directory cannot be created
/// * If any file or symlink copy fails (fail-fast)
pub fn copy_tree(source: &Path, target: &Path) -> Result<u64, CopyError> {
    log::debug!(
        "Copying directory: {} -> {}",
        source.display(),
        target.display()
    );

    fs::symlink_metadata(source).map_err(|e| CopyError::MetadataError {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    let mut files_copied = 0u64;

    for entry in walker(source) {
        let entry = entry.map_err(|e| CopyError::EnumerationError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let source_path = entry.path();
        let rel_path =
            source_path
                .strip_prefix(source)
                .map_err(|_| CopyError::EnumerationError {
                    path: source_path.clone(),
                    message: "Failed to strip prefix".to_string(),
                })?;
        let target_path = target.join(rel_path);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target_path).map_err(|e| CopyError::CreateDirError {
                path: target_path.clone(),
                io_error: e,
            })?;
        } else if is_directory_link(&source_path, file_type) {
            log::debug!("Skipping directory symlink {}", source_path.display());
        } else {
            copy_file(&source_path, &target_path)?;
            files_copied += 1;
        }
    }

    log::debug!("Copied {files_copied} files into {}", target.display());

    Ok(files_copied)
}
