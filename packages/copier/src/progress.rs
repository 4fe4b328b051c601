//! Progress and summary reporting for plan execution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use crate::executor::Applied;
use crate::operation::{Operation, OperationKind};

/// Progress information for plan execution.
#[derive(Debug, Clone)]
pub struct ExecuteProgress {
    /// Total number of operations in the plan.
    pub operations_total: usize,
    /// Number of operations completed so far.
    pub operations_done: usize,
    /// The operation that just completed (if any).
    pub current: Option<Operation>,
}

impl ExecuteProgress {
    /// Create a new progress report.
    #[must_use]
    pub const fn new(
        operations_total: usize,
        operations_done: usize,
        current: Option<Operation>,
    ) -> Self {
        Self {
            operations_total,
            operations_done,
            current,
        }
    }

    /// Calculate progress as a percentage (0.0 to 100.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.operations_total == 0 {
            100.0
        } else {
            (self.operations_done as f64 / self.operations_total as f64) * 100.0
        }
    }
}

/// What an execution run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteSummary {
    /// Tree operations applied.
    pub trees: usize,
    /// Single-file operations applied.
    pub singles: usize,
    /// Regular files written by copying (zero in link mode).
    pub files_copied: u64,
    /// Symlinks created.
    pub links: usize,
}

impl ExecuteSummary {
    pub(crate) fn record(&mut self, kind: OperationKind, applied: Applied) {
        match kind {
            OperationKind::Tree => self.trees += 1,
            OperationKind::Single => self.singles += 1,
        }
        match applied {
            Applied::Linked => self.links += 1,
            Applied::Copied { files } => self.files_copied += files,
        }
    }
}
