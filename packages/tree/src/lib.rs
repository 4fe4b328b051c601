//! Order-independent, hashable nested trees.
//!
//! A [`StructuralTree`] maps path segments to either a leaf value or a
//! nested subtree. Two trees holding the same keys and values hash to the
//! same [`StructuralHash`] no matter in which order they were populated,
//! which makes it cheap to find subtrees that are structurally identical.
//!
//! # Example
//!
//! ```rust
//! use copy_merge_tree::StructuralTree;
//!
//! let mut a = StructuralTree::new();
//! a.set_path(&["x", "one.txt"], "origin").unwrap();
//! a.set_path(&["x", "two.txt"], "origin").unwrap();
//!
//! let mut b = StructuralTree::new();
//! b.set_path(&["x", "two.txt"], "origin").unwrap();
//! b.set_path(&["x", "one.txt"], "origin").unwrap();
//!
//! assert_eq!(a.structural_hash(), b.structural_hash());
//!
//! let subtrees: Vec<_> = a.subtrees("/").map(|(path, _)| path).collect();
//! assert_eq!(subtrees, vec!["x".to_string()]);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod hash;
mod subtrees;
mod tree;

pub use error::TreeError;
pub use hash::StructuralHash;
pub use subtrees::Subtrees;
pub use tree::{Node, StructuralTree};
