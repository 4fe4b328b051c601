//! Copy scheduling and merge planning for copy-merge.
//!
//! Many "copy this directory's files over there" requests, possibly
//! overlapping the same destination, are reduced to the smallest list of
//! filesystem operations that reproduces all of them:
//!
//! * Scheduling records one single-file operation per source file, plus
//!   the file's origin in a [`PathIndex`]
//! * Merging replaces every destination subtree that is structurally
//!   identical to a source subtree with one tree operation (bulk copy or
//!   symlink), unless another requested destination lives inside it
//! * Execution applies the plan in order, cleaning up whatever is in the
//!   way of each target
//!
//! # Example
//!
//! ```rust,ignore
//! use copy_merge_copier::Copier;
//!
//! let mut copier = Copier::new(false);
//! copier.copy("static/one", "public")?;
//! copier.copy("static/two", "public")?;
//! copier.copy("static/three", "public/three")?;
//!
//! copier.merge();
//! for operation in copier.operations() {
//!     println!("{operation}");
//! }
//!
//! copier.execute()?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copier;
mod error;
mod executor;
mod index;
mod operation;
mod planner;
mod progress;

pub use copier::Copier;
pub use error::CopierError;
pub use executor::{Applied, execute_operation};
pub use index::{PathIndex, SEPARATOR};
pub use operation::{Operation, OperationKind};
pub use planner::{is_valid_target, merge_operations};
pub use progress::{ExecuteProgress, ExecuteSummary};
