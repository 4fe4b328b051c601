//! Counting the entries a tree copy would write.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use crate::walk::{is_directory_link, walker};

/// Count files in a path.
///
/// - If path is a file or a symlink: returns 1
/// - If path is a directory: returns the number of files below it, the
///   same entries a tree copy writes (symlinks to files count, directories
///   and symlinks to directories do not)
/// - If path doesn't exist: returns 0
///
/// Unreadable subdirectories are skipped rather than reported.
#[must_use]
pub fn count_files(path: &Path) -> u64 {
    let Ok(metadata) = path.symlink_metadata() else {
        return 0;
    };

    if !metadata.is_dir() {
        return 1;
    }

    walker(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            e.depth > 0
                && !e.file_type().is_dir()
                && !is_directory_link(&e.path(), e.file_type())
        })
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_count_files_plain_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("b.txt");
        fs::write(&file, "b").unwrap();

        assert_eq!(count_files(&file), 1);
    }

    #[test]
    fn test_count_files_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/empty")).unwrap();
        fs::write(dir.path().join("a/b.txt"), "b").unwrap();
        fs::write(dir.path().join("a/c.txt"), "c").unwrap();
        fs::write(dir.path().join("top.txt"), "top").unwrap();

        assert_eq!(count_files(dir.path()), 3);
        assert_eq!(count_files(&dir.path().join("a")), 2);
        assert_eq!(count_files(&dir.path().join("a/empty")), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_count_files_counts_symlinks() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.txt"), "real").unwrap();
        std::os::unix::fs::symlink("real.txt", dir.path().join("alias.txt")).unwrap();

        assert_eq!(count_files(dir.path()), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_count_files_skips_directory_symlinks() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/x.txt"), "x").unwrap();
        std::os::unix::fs::symlink("real", dir.path().join("alias")).unwrap();

        assert_eq!(count_files(dir.path()), 1);
    }

    #[test]
    fn test_count_files_missing_path() {
        let dir = TempDir::new().unwrap();

        assert_eq!(count_files(&dir.path().join("missing")), 0);
    }
}
