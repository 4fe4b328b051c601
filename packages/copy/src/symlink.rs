//! Symlink creation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::Path;

use crate::error::CopyError;

/// Whether this platform can create symbolic links at all.
///
/// When `false`, [`create_symlink`] always fails and callers are expected
/// to copy instead.
pub const SYMLINKS_SUPPORTED: bool = cfg!(any(unix, windows));

/// Create a symlink at `target` pointing to `source`.
///
/// Nothing may exist at `target`, and its parent directory must exist.
///
/// # Arguments
///
/// * `source` - What the symlink points to
/// * `target` - Path where the symlink will be created
///
/// # Errors
///
/// * If the symlink cannot be created
pub fn create_symlink(source: &Path, target: &Path) -> Result<(), CopyError> {
    log::debug!(
        "Creating symlink: {} -> {}",
        target.display(),
        source.display()
    );

    platform_symlink(source, target).map_err(|e| CopyError::CreateSymlinkError {
        path: target.to_path_buf(),
        link_target: source.to_path_buf(),
        io_error: e,
    })
}

#[cfg(unix)]
fn platform_symlink(source: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

#[cfg(windows)]
fn platform_symlink(source: &Path, target: &Path) -> io::Result<()> {
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(source, target)
    } else {
        std::os::windows::fs::symlink_file(source, target)
    }
}

#[cfg(not(any(unix, windows)))]
fn platform_symlink(_source: &Path, _target: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}
