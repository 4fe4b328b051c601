//! Filesystem primitives for copy-merge.
//!
//! This crate is the only place where copy-merge touches the disk:
//!
//! * Recursive file enumeration using `jwalk`
//! * Single file copies with copy-on-write support via `reflink-copy`
//!   (APFS, Btrfs, `ReFS`)
//! * Whole directory tree copies
//! * Symlink creation
//! * Destination cleanup (file, symlink and directory removal)
//!
//! Everything here runs sequentially on the calling thread.
//!
//! # Example
//!
//! ```rust,ignore
//! use copy_merge_copy::{copy_tree, enumerate_files, prepare_parent};
//!
//! for file in enumerate_files(source)? {
//!     println!("{}", file.display());
//! }
//!
//! prepare_parent(target)?;
//! let files = copy_tree(source, target)?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod count;
mod error;
mod remove;
mod symlink;
mod walk;

pub use copy::{copy_file, copy_tree};
pub use count::count_files;
pub use error::CopyError;
pub use remove::{prepare_parent, remove_entry, remove_tree};
pub use symlink::{SYMLINKS_SUPPORTED, create_symlink};
pub use walk::enumerate_files;
