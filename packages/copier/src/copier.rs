//! The copy scheduling engine.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use copy_merge_copy::{CopyError, SYMLINKS_SUPPORTED, enumerate_files};

use crate::error::CopierError;
use crate::executor::execute_operation;
use crate::index::{PathIndex, utf8};
use crate::operation::Operation;
use crate::planner::merge_operations;
use crate::progress::{ExecuteProgress, ExecuteSummary};

/// Copies many source directories into destinations, merging the work
/// into whole-subtree operations wherever possible.
///
/// Call [`Copier::copy`] once per source/destination pair, then
/// [`Copier::execute`]. The plan is merged exactly once, either
/// explicitly through [`Copier::merge`] or implicitly on execution. No
/// further copies can be scheduled after that.
#[derive(Debug, Clone, Default)]
pub struct Copier {
    link: bool,
    index: PathIndex,
    operations: Vec<Operation>,
    target_bases: Vec<PathBuf>,
    merged: bool,
}

impl Copier {
    /// Create an empty engine.
    ///
    /// With `link` set, operations create symlinks to their source instead
    /// of copying (falling back to copying where symlinks are unsupported).
    #[must_use]
    pub const fn new(link: bool) -> Self {
        Self {
            link,
            index: PathIndex::new(),
            operations: Vec::new(),
            target_bases: Vec::new(),
            merged: false,
        }
    }

    /// Whether link mode was requested.
    #[must_use]
    pub const fn link(&self) -> bool {
        self.link
    }

    /// Whether the plan has been merged.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged
    }

    /// The current operation list: raw single-file operations before the
    /// merge, the reduced plan afterwards.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The path index built so far.
    #[must_use]
    pub const fn index(&self) -> &PathIndex {
        &self.index
    }

    /// Every destination root passed to [`Copier::copy`].
    #[must_use]
    pub fn target_bases(&self) -> &[PathBuf] {
        &self.target_bases
    }

    /// Schedule a copy of every file below `source` into `target`.
    ///
    /// Each file becomes one single-file operation at the same relative
    /// location under `target`. Nothing is written to disk.
    ///
    /// # Errors
    ///
    /// * [`CopierError::AlreadyMerged`] if the plan was already merged
    /// * [`CopierError::SourceNotFound`] if `source` is not a directory
    /// * [`CopierError::NonUtf8Path`] if a scheduled path is not UTF-8
    /// * If `source` cannot be enumerated
    pub fn copy(
        &mut self,
        source: impl AsRef<Path>,
        target: impl AsRef<Path>,
    ) -> Result<(), CopierError> {
        let source = source.as_ref();
        let target = target.as_ref();

        if self.merged {
            return Err(CopierError::AlreadyMerged);
        }

        if !source.is_dir() {
            return Err(CopierError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }

        log::info!(
            "Scheduling copy {} -> {}",
            source.display(),
            target.display()
        );

        let origin = utf8(source)?;
        utf8(target)?;

        // Resolve every pair before touching the index so a failure leaves
        // the engine unchanged.
        let mut pairs = Vec::new();
        for file in enumerate_files(source)? {
            let rel_path = file
                .strip_prefix(source)
                .map_err(|_| CopyError::EnumerationError {
                    path: file.clone(),
                    message: "Failed to strip prefix".to_string(),
                })?;
            let file_target = target.join(rel_path);
            utf8(&file)?;
            utf8(&file_target)?;
            pairs.push((file, file_target));
        }

        log::debug!("Scheduled {} files from {}", pairs.len(), source.display());

        for (file, file_target) in pairs {
            self.index
                .record(origin, utf8(&file)?, utf8(&file_target)?)?;
            self.operations.push(Operation::single(file, file_target));
        }
        self.target_bases.push(target.to_path_buf());

        Ok(())
    }

    /// Reduce the scheduled single-file operations into the final plan.
    ///
    /// Runs once; later calls do nothing.
    pub fn merge(&mut self) {
        if self.merged {
            return;
        }

        log::info!("Merging {} scheduled operations", self.operations.len());

        let singles = std::mem::take(&mut self.operations);
        self.operations = merge_operations(&self.index, singles, &self.target_bases);
        self.merged = true;

        for operation in &self.operations {
            log::debug!("Planned {operation}");
        }
    }

    /// Merge (if needed) and perform every planned operation in order.
    ///
    /// # Errors
    ///
    /// * On the first filesystem failure; operations already applied are
    ///   left in place
    pub fn execute(&mut self) -> Result<ExecuteSummary, CopierError> {
        self.execute_with_progress(|_| {})
    }

    /// Like [`Copier::execute`], reporting progress once before the first
    /// operation and after every completed operation.
    ///
    /// # Errors
    ///
    /// * On the first filesystem failure; operations already applied are
    ///   left in place
    pub fn execute_with_progress<F>(&mut self, on_progress: F) -> Result<ExecuteSummary, CopierError>
    where
        F: Fn(&ExecuteProgress),
    {
        self.merge();

        let total = self.operations.len();
        let link = self.link && SYMLINKS_SUPPORTED;

        log::info!(
            "Executing {total} operations ({})",
            if link { "link" } else { "copy" }
        );

        on_progress(&ExecuteProgress::new(total, 0, None));

        let mut summary = ExecuteSummary::default();
        for (done, operation) in self.operations.iter().enumerate() {
            let applied = execute_operation(operation, link)?;
            summary.record(operation.kind(), applied);
            on_progress(&ExecuteProgress::new(
                total,
                done + 1,
                Some(operation.clone()),
            ));
        }

        log::info!(
            "Executed {} tree and {} single operations",
            summary.trees,
            summary.singles
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    use crate::operation::OperationKind;

    fn write(base: &Path, rel: &str, content: &str) {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_schedules_singles() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(source.path(), "a/b.txt", "b");
        write(source.path(), "c.txt", "c");

        let mut copier = Copier::new(false);
        copier.copy(source.path(), target.path()).unwrap();

        assert_eq!(
            copier.operations(),
            &[
                Operation::single(source.path().join("a/b.txt"), target.path().join("a/b.txt")),
                Operation::single(source.path().join("c.txt"), target.path().join("c.txt")),
            ]
        );
        assert_eq!(copier.target_bases(), &[target.path().to_path_buf()]);
        assert!(!copier.is_merged());
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = TempDir::new().unwrap();
        let mut copier = Copier::new(false);

        let result = copier.copy(dir.path().join("missing"), dir.path().join("out"));

        assert!(matches!(result, Err(CopierError::SourceNotFound { .. })));
        assert!(copier.operations().is_empty());
        assert!(copier.target_bases().is_empty());
    }

    #[test]
    fn test_copy_after_merge_rejected() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(source.path(), "a.txt", "a");

        let mut copier = Copier::new(false);
        copier.merge();

        let result = copier.copy(source.path(), target.path());

        assert!(matches!(result, Err(CopierError::AlreadyMerged)));
    }

    #[test]
    fn test_merge_runs_once() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(source.path(), "sub/a.txt", "a");

        let mut copier = Copier::new(false);
        copier.copy(source.path(), target.path()).unwrap();
        copier.merge();
        let first = copier.operations().to_vec();
        copier.merge();

        assert_eq!(copier.operations(), first.as_slice());
        assert!(copier.is_merged());
    }

    #[test]
    fn test_merge_collapses_subtree() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(source.path(), "sub/a.txt", "a");
        write(source.path(), "sub/b.txt", "b");
        write(source.path(), "top.txt", "top");

        let mut copier = Copier::new(false);
        copier.copy(source.path(), target.path()).unwrap();
        copier.merge();

        assert_eq!(
            copier.operations(),
            &[
                Operation::tree(source.path().join("sub"), target.path().join("sub")),
                Operation::single(source.path().join("top.txt"), target.path().join("top.txt")),
            ]
        );
    }

    #[test]
    fn test_empty_copier_executes_nothing() {
        let mut copier = Copier::new(false);

        let summary = copier.execute().unwrap();

        assert_eq!(summary, ExecuteSummary::default());
        assert!(copier.is_merged());
    }

    #[test]
    fn test_execute_reports_progress() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(source.path(), "sub/a.txt", "a");
        write(source.path(), "top.txt", "top");

        let mut copier = Copier::new(false);
        copier.copy(source.path(), target.path()).unwrap();

        let reports = RefCell::new(Vec::new());
        let summary = copier
            .execute_with_progress(|progress| {
                reports
                    .borrow_mut()
                    .push((progress.operations_done, progress.current.clone()));
            })
            .unwrap();

        let reports = reports.into_inner();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0], (0, None));
        assert_eq!(reports[2].0, 2);
        assert_eq!(
            reports[1].1.as_ref().map(Operation::kind),
            Some(OperationKind::Tree)
        );
        assert_eq!(summary.trees, 1);
        assert_eq!(summary.singles, 1);
        assert_eq!(summary.files_copied, 2);
    }

    #[test]
    fn test_duplicate_destination_last_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(first.path(), "same.txt", "first");
        write(second.path(), "same.txt", "second");

        let mut copier = Copier::new(false);
        copier.copy(first.path(), target.path()).unwrap();
        copier.copy(second.path(), target.path()).unwrap();
        copier.execute().unwrap();

        assert_eq!(
            copier.operations(),
            &[Operation::single(
                second.path().join("same.txt"),
                target.path().join("same.txt")
            )]
        );
        assert_eq!(
            fs::read_to_string(target.path().join("same.txt")).unwrap(),
            "second"
        );
    }
}
