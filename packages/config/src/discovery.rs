//! Plan file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// File name looked up by [`discover_config`].
pub const CONFIG_FILE_NAME: &str = "copy-merge.toml";

/// Find the nearest plan file, starting at `start_dir` and walking up
/// through its ancestors.
///
/// Returns `None` if no ancestor holds a [`CONFIG_FILE_NAME`] file.
#[must_use]
pub fn discover_config(start_dir: &Path) -> Option<PathBuf> {
    log::debug!("Discovering {CONFIG_FILE_NAME} from {}", start_dir.display());

    let found = start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => log::debug!("Found config {}", path.display()),
        None => log::debug!("No config found"),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            discover_config(&nested),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            discover_config(&nested),
            Some(nested.join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_discover_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let found = discover_config(dir.path());

        assert_ne!(found, Some(dir.path().join(CONFIG_FILE_NAME)));
    }
}
