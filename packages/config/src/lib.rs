//! Plan file loading for copy-merge.
//!
//! A plan file lists the source/destination pairs to schedule, and
//! optionally enables link mode:
//!
//! ```toml
//! description = "Static assets"
//! link = false
//!
//! [[copy]]
//! source = "static/one"
//! target = "public"
//!
//! [[copy]]
//! source = "static/three"
//! target = "public/three"
//! ```
//!
//! Relative paths resolve against the directory holding the plan file.
//!
//! # Example
//!
//! ```rust,ignore
//! use copy_merge_config::{discover_config, load_config};
//!
//! if let Some(path) = discover_config(&cwd) {
//!     let loaded = load_config(&path)?;
//!     for (source, target) in loaded.resolved_mappings() {
//!         println!("{} -> {}", source.display(), target.display());
//!     }
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod toml_loader;
mod types;

pub use discovery::{CONFIG_FILE_NAME, discover_config};
pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{Config, CopyMapping, LoadedConfig};

use std::path::Path;

/// Load a plan file, checking its format from the extension.
///
/// # Arguments
///
/// * `path` - Path to the plan file
///
/// # Errors
///
/// * If the file extension is not supported
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let config = match extension {
        "toml" => load_toml_config(path)?,
        _ => return Err(ConfigError::UnsupportedFormat(extension.to_string())),
    };

    let config_dir = path
        .parent()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?
        .to_path_buf();

    Ok(LoadedConfig {
        config,
        config_path: path.to_path_buf(),
        config_dir,
    })
}
