//! Origin bookkeeping for every scheduled file.
//!
//! Each scheduled file is recorded twice: under its source path in
//! `origins` and under its destination path in `targets`. Both leaves hold
//! the *source root* that produced the file. A source subtree and a
//! destination subtree therefore share a structural hash exactly when they
//! were populated from the same root with the same relative layout.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path};

use copy_merge_tree::{StructuralTree, TreeError};

use crate::error::CopierError;

/// Separator used to split paths into tree segments and to join subtree
/// paths back together.
pub const SEPARATOR: &str = MAIN_SEPARATOR_STR;

/// Source-side and destination-side trees of scheduled files.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    origins: StructuralTree<String>,
    targets: StructuralTree<String>,
}

impl PathIndex {
    /// Create an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origins: StructuralTree::new(),
            targets: StructuralTree::new(),
        }
    }

    /// Record one scheduled file copied from `source` to `target`, both
    /// attributed to the source root `origin`.
    ///
    /// A later record for the same `source` or `target` overwrites the
    /// earlier one.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidPath`] if either path is empty
    pub fn record(&mut self, origin: &str, source: &str, target: &str) -> Result<(), TreeError> {
        if source.is_empty() || target.is_empty() {
            return Err(TreeError::InvalidPath);
        }

        self.origins.set_path(&segments(source), origin.to_string())?;
        self.targets.set_path(&segments(target), origin.to_string())?;

        Ok(())
    }

    /// Source paths keyed by segment, valued by source root.
    #[must_use]
    pub const fn origins(&self) -> &StructuralTree<String> {
        &self.origins
    }

    /// Destination paths keyed by segment, valued by source root.
    #[must_use]
    pub const fn targets(&self) -> &StructuralTree<String> {
        &self.targets
    }
}

/// Split a path string into tree segments.
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split(MAIN_SEPARATOR).collect()
}

/// Borrow `path` as UTF-8, as required for indexing.
pub(crate) fn utf8(path: &Path) -> Result<&str, CopierError> {
    path.to_str().ok_or_else(|| CopierError::NonUtf8Path {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(parts: &[&str]) -> String {
        parts.join(SEPARATOR)
    }

    #[test]
    fn test_segments_round_trip() {
        let path = join(&["", "tmp", "source", "one", "b.txt"]);
        assert_eq!(segments(&path).join(SEPARATOR), path);
    }

    #[test]
    fn test_record_stores_origin_on_both_sides() {
        let mut index = PathIndex::new();
        let source = join(&["src", "one", "a.txt"]);
        let target = join(&["out", "a.txt"]);

        index.record("src-one", &source, &target).unwrap();

        assert_eq!(
            index.origins().get_value(&segments(&source)).unwrap(),
            "src-one"
        );
        assert_eq!(
            index.targets().get_value(&segments(&target)).unwrap(),
            "src-one"
        );
    }

    #[test]
    fn test_record_last_target_wins() {
        let mut index = PathIndex::new();
        let target = join(&["out", "a.txt"]);

        index
            .record("first", &join(&["first", "a.txt"]), &target)
            .unwrap();
        index
            .record("second", &join(&["second", "a.txt"]), &target)
            .unwrap();

        assert_eq!(
            index.targets().get_value(&segments(&target)).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_record_rejects_empty_paths() {
        let mut index = PathIndex::new();

        assert_eq!(
            index.record("origin", "", "out"),
            Err(TreeError::InvalidPath)
        );
        assert!(index.origins().is_empty());
    }

    #[test]
    fn test_matching_layouts_share_hash() {
        let mut index = PathIndex::new();
        let origin = join(&["src", "one"]);

        for name in ["d.txt", "e.txt"] {
            index
                .record(
                    &origin,
                    &join(&["src", "one", "c", name]),
                    &join(&["out", "c", name]),
                )
                .unwrap();
        }

        let source_hash = index
            .origins()
            .get_path(&["src", "one", "c"])
            .unwrap()
            .structural_hash();
        let target_hash = index
            .targets()
            .get_path(&["out", "c"])
            .unwrap()
            .structural_hash();

        assert_eq!(source_hash, target_hash);
    }
}
