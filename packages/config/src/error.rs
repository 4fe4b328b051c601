//! Error types for plan file loading.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during plan file loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the plan file.
    #[error("Failed to read config file {}: {source}", path.display())]
    ReadError {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML plan file.
    #[error("Failed to parse TOML config {}: {source}", path.display())]
    TomlParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Unsupported plan file format.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Invalid plan file path.
    #[error("Invalid config path: {}", .0.display())]
    InvalidPath(PathBuf),
}
