//! Plan file types for copy-merge.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One requested copy from a source directory into a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyMapping {
    /// Source directory (relative to the plan file's directory, or absolute).
    pub source: String,
    /// Destination directory (relative to the plan file's directory, or absolute).
    pub target: String,
}

/// Plan file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Human-readable description of this plan.
    #[serde(default)]
    pub description: String,

    /// Symlink instead of copying where the platform allows it.
    #[serde(default)]
    pub link: bool,

    /// Copies to schedule, in order.
    #[serde(default)]
    pub copy: Vec<CopyMapping>,
}

/// A loaded plan file with metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed plan.
    pub config: Config,
    /// Path to the plan file.
    pub config_path: PathBuf,
    /// Directory containing the plan file.
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// The plan's mappings as cleaned `(source, target)` paths, with
    /// relative entries resolved against the plan file's directory.
    #[must_use]
    pub fn resolved_mappings(&self) -> Vec<(PathBuf, PathBuf)> {
        self.config
            .copy
            .iter()
            .map(|mapping| {
                (
                    path_clean::clean(self.config_dir.join(&mapping.source)),
                    path_clean::clean(self.config_dir.join(&mapping.target)),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_resolved_mappings() {
        let loaded = LoadedConfig {
            config: Config {
                description: String::new(),
                link: false,
                copy: vec![
                    CopyMapping {
                        source: "static/../assets/one".to_string(),
                        target: "./public".to_string(),
                    },
                    CopyMapping {
                        source: "/abs/two".to_string(),
                        target: "public/two".to_string(),
                    },
                ],
            },
            config_path: PathBuf::from("/project/copy-merge.toml"),
            config_dir: PathBuf::from("/project"),
        };

        assert_eq!(
            loaded.resolved_mappings(),
            vec![
                (
                    PathBuf::from("/project/assets/one"),
                    PathBuf::from("/project/public")
                ),
                (
                    PathBuf::from("/abs/two"),
                    PathBuf::from("/project/public/two")
                ),
            ]
        );
    }
}
