//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::Colorize;
use copy_merge_copier::{ExecuteProgress, Operation};
use indicatif::{ProgressBar, ProgressStyle};

use crate::output::kind_tag;

/// Progress display for plan execution.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress display for `total` operations.
    ///
    /// If progress is disabled, the bar is hidden but completed operations
    /// are still printed.
    #[must_use]
    pub fn new(enabled: bool, total: u64) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(" Merging [{bar:25.green/dim}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("━━─"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        Self { bar }
    }

    /// Update the bar from an execution snapshot.
    pub fn update(&self, progress: &ExecuteProgress) {
        self.bar.set_position(progress.operations_done as u64);

        if let Some(operation) = &progress.current {
            self.print_result(operation);
            self.bar
                .set_message(format!("{:.0}%", progress.percentage()));
        }
    }

    /// Print a completed operation line above the bar.
    fn print_result(&self, operation: &Operation) {
        let line = format!(
            "{} {} {}",
            "✓".green(),
            kind_tag(operation.kind()),
            operation.target().display()
        );
        if self.bar.is_hidden() {
            println!("{line}");
        } else {
            self.bar.println(line);
        }
    }

    /// Clear the bar (for clean output after completion).
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
