//! Merge planning: collapsing per-file operations into subtree operations.
//!
//! The planner works in two passes over sorted destination paths:
//!
//! 1. Source subtrees whose structural hash matches a destination subtree
//!    become tree candidates. Candidates nested under an earlier candidate
//!    are dropped.
//! 2. A merge join walks the sorted single-file operations alongside the
//!    reduced tree operations and drops every single that a tree operation
//!    already covers.
//!
//! Paths are compared per component, never as raw strings, so a sorted
//! list keeps every directory's descendants in one contiguous run right
//! after it.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use copy_merge_tree::StructuralHash;

use crate::index::{PathIndex, SEPARATOR};
use crate::operation::Operation;

/// Reduce raw single-file operations into the final plan.
///
/// Returns the reduced tree operations followed by the surviving single
/// operations, each group sorted by destination path.
///
/// # Arguments
///
/// * `index` - Origins and targets of every scheduled file
/// * `singles` - The raw single-file operations, in scheduling order
/// * `target_bases` - Every destination root passed to a `copy` call
#[must_use]
pub fn merge_operations(
    index: &PathIndex,
    singles: Vec<Operation>,
    target_bases: &[PathBuf],
) -> Vec<Operation> {
    let candidates = tree_candidates(index, target_bases);
    log::debug!("Found {} tree candidates", candidates.len());

    let trees = reduce_tree_operations(candidates);
    let singles = deduplicate_singles(singles);
    let singles = drop_covered_singles(&trees, singles);

    log::debug!(
        "Merged plan: {} tree operations, {} single operations",
        trees.len(),
        singles.len()
    );

    trees.into_iter().chain(singles).collect()
}

/// Whether a tree operation may write `candidate` in one shot.
///
/// A candidate is rejected when any target base lives at or inside it:
/// that base was requested independently and must stay reconcilable on
/// its own.
#[must_use]
pub fn is_valid_target(candidate: &Path, target_bases: &[PathBuf]) -> bool {
    !target_bases.iter().any(|base| base.starts_with(candidate))
}

/// Pair every source subtree with a structurally identical destination
/// subtree.
fn tree_candidates(index: &PathIndex, target_bases: &[PathBuf]) -> Vec<Operation> {
    // Later subtrees in pre-order overwrite earlier ones sharing a hash.
    let target_trees: HashMap<StructuralHash, String> = index
        .targets()
        .subtrees(SEPARATOR)
        .map(|(path, hash)| (hash, path))
        .collect();

    index
        .origins()
        .subtrees(SEPARATOR)
        .filter_map(|(source, hash)| {
            let target = PathBuf::from(target_trees.get(&hash)?);
            if is_valid_target(&target, target_bases) {
                Some(Operation::tree(PathBuf::from(source), target))
            } else {
                log::trace!("Rejected tree candidate {}", target.display());
                None
            }
        })
        .collect()
}

/// Sort tree candidates by destination and drop the ones nested under
/// the previously retained candidate.
fn reduce_tree_operations(mut candidates: Vec<Operation>) -> Vec<Operation> {
    candidates.sort_by(|a, b| a.target().cmp(b.target()));

    let mut reduced: Vec<Operation> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if reduced
            .last()
            .is_some_and(|parent| candidate.target().starts_with(parent.target()))
        {
            continue;
        }
        reduced.push(candidate);
    }

    reduced
}

/// Sort singles by destination, keeping only the last scheduled single
/// for each destination.
fn deduplicate_singles(mut singles: Vec<Operation>) -> Vec<Operation> {
    singles.sort_by(|a, b| a.target().cmp(b.target()));

    let mut kept: Vec<Operation> = Vec::with_capacity(singles.len());
    for single in singles {
        match kept.last_mut() {
            Some(last) if last.target() == single.target() => {
                log::debug!(
                    "Duplicate destination {}: {} replaces {}",
                    single.target().display(),
                    single.source().display(),
                    last.source().display()
                );
                *last = single;
            }
            _ => kept.push(single),
        }
    }

    kept
}

/// Merge join of sorted tree operations and sorted singles.
fn drop_covered_singles(trees: &[Operation], singles: Vec<Operation>) -> Vec<Operation> {
    let mut pending = trees.iter().peekable();

    singles
        .into_iter()
        .filter(|single| {
            while let Some(tree) = pending.peek() {
                if single.target().starts_with(tree.target()) {
                    return false;
                }
                if tree.target() < single.target() {
                    pending.next();
                } else {
                    break;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(parts: &[&str]) -> PathBuf {
        parts.iter().collect()
    }

    fn single(source: &[&str], target: &[&str]) -> Operation {
        Operation::single(p(source), p(target))
    }

    fn tree(source: &[&str], target: &[&str]) -> Operation {
        Operation::tree(p(source), p(target))
    }

    #[test]
    fn test_is_valid_target() {
        let bases = vec![p(&["out"]), p(&["out", "three"])];

        assert!(is_valid_target(&p(&["out", "c"]), &bases));
        assert!(is_valid_target(&p(&["out", "three", "a"]), &bases));
        assert!(!is_valid_target(&p(&["out", "three"]), &bases));
        assert!(!is_valid_target(&p(&["out"]), &bases));
    }

    #[test]
    fn test_is_valid_target_component_wise() {
        let bases = vec![p(&["out", "abc"])];

        assert!(is_valid_target(&p(&["out", "ab"]), &bases));
    }

    #[test]
    fn test_reduce_drops_nested_candidates() {
        let reduced = reduce_tree_operations(vec![
            tree(&["s", "zzb", "zzc"], &["out", "zzb", "zzc"]),
            tree(&["s", "zzz"], &["out", "zzz"]),
            tree(&["s", "zzb"], &["out", "zzb"]),
            tree(&["s", "c"], &["out", "c"]),
        ]);

        assert_eq!(
            reduced,
            vec![
                tree(&["s", "c"], &["out", "c"]),
                tree(&["s", "zzb"], &["out", "zzb"]),
                tree(&["s", "zzz"], &["out", "zzz"]),
            ]
        );
    }

    #[test]
    fn test_reduce_keeps_siblings_sharing_prefix() {
        let reduced = reduce_tree_operations(vec![
            tree(&["s", "a"], &["out", "a"]),
            tree(&["s", "ab"], &["out", "ab"]),
        ]);

        assert_eq!(reduced.len(), 2);
    }

    #[test]
    fn test_deduplicate_keeps_last_scheduled() {
        let kept = deduplicate_singles(vec![
            single(&["first", "x.txt"], &["out", "x.txt"]),
            single(&["first", "y.txt"], &["out", "y.txt"]),
            single(&["second", "x.txt"], &["out", "x.txt"]),
        ]);

        assert_eq!(
            kept,
            vec![
                single(&["second", "x.txt"], &["out", "x.txt"]),
                single(&["first", "y.txt"], &["out", "y.txt"]),
            ]
        );
    }

    #[test]
    fn test_sorted_paths_keep_descendants_contiguous() {
        let mut paths = vec![
            p(&["out", "a.txt"]),
            p(&["out", "a", "z.txt"]),
            p(&["out", "a-b"]),
            p(&["out", "a", "b", "c.txt"]),
            p(&["out", "a"]),
        ];
        paths.sort();

        let parent = p(&["out", "a"]);
        let positions: Vec<usize> = paths
            .iter()
            .enumerate()
            .filter(|(_, path)| path.starts_with(&parent))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(paths[0], parent);
    }

    #[test]
    fn test_merge_join_drops_covered_singles() {
        let trees = vec![
            tree(&["s", "c"], &["out", "c"]),
            tree(&["s", "m"], &["out", "m"]),
        ];
        let singles = vec![
            single(&["s", "a.txt"], &["out", "a.txt"]),
            single(&["s", "c", "d.txt"], &["out", "c", "d.txt"]),
            single(&["s", "c", "e.txt"], &["out", "c", "e.txt"]),
            single(&["s", "c.txt"], &["out", "c.txt"]),
            single(&["s", "m", "n", "o.txt"], &["out", "m", "n", "o.txt"]),
            single(&["s", "z.txt"], &["out", "z.txt"]),
        ];

        let survivors = drop_covered_singles(&trees, singles);

        assert_eq!(
            survivors,
            vec![
                single(&["s", "a.txt"], &["out", "a.txt"]),
                single(&["s", "c.txt"], &["out", "c.txt"]),
                single(&["s", "z.txt"], &["out", "z.txt"]),
            ]
        );
    }

    #[test]
    fn test_merge_join_prefix_is_not_nesting() {
        let trees = vec![tree(&["s", "a"], &["out", "a"])];
        let singles = vec![
            single(&["s", "a", "x.txt"], &["out", "a", "x.txt"]),
            single(&["s", "ab.txt"], &["out", "ab.txt"]),
        ];

        let survivors = drop_covered_singles(&trees, singles);

        assert_eq!(survivors, vec![single(&["s", "ab.txt"], &["out", "ab.txt"])]);
    }

    #[test]
    fn test_merge_without_matches_only_sorts() {
        let mut index = PathIndex::new();
        let origin = p(&["s", "one"]);
        let origin = origin.to_str().unwrap();
        let b = single(&["s", "one", "b.txt"], &["out", "b.txt"]);
        let a = single(&["s", "one", "a.txt"], &["out", "a.txt"]);
        for op in [&b, &a] {
            index
                .record(
                    origin,
                    op.source().to_str().unwrap(),
                    op.target().to_str().unwrap(),
                )
                .unwrap();
        }

        let plan = merge_operations(&index, vec![b.clone(), a.clone()], &[p(&["out"])]);

        assert_eq!(plan, vec![a, b]);
    }

    #[test]
    fn test_merge_overlap_guard() {
        let mut index = PathIndex::new();
        let origin = p(&["s", "three"]);
        let origin = origin.to_str().unwrap();
        let ops = [
            single(&["s", "three", "a", "a.txt"], &["out", "three", "a", "a.txt"]),
            single(&["s", "three", "a", "d.txt"], &["out", "three", "a", "d.txt"]),
        ];
        for op in &ops {
            index
                .record(
                    origin,
                    op.source().to_str().unwrap(),
                    op.target().to_str().unwrap(),
                )
                .unwrap();
        }

        let plan = merge_operations(&index, ops.to_vec(), &[p(&["out", "three"])]);

        assert_eq!(
            plan,
            vec![tree(&["s", "three", "a"], &["out", "three", "a"])]
        );
        assert!(
            plan.iter()
                .all(|op| op.target() != p(&["out", "three"]).as_path())
        );
    }
}
