//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::{ColoredString, Colorize};
use copy_merge_copier::{ExecuteSummary, Operation, OperationKind};

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{} {}\n", "📦", message.bold());
}

/// Print the plan file in use.
pub fn print_config_info(path: &str, description: &str) {
    if description.is_empty() {
        println!("Config: {}", path.cyan());
    } else {
        println!("Config: {} - {}", path.cyan(), description);
    }
}

/// Coloured tag for an operation kind.
#[must_use]
pub fn kind_tag(kind: OperationKind) -> ColoredString {
    match kind {
        OperationKind::Tree => "tree  ".green().bold(),
        OperationKind::Single => "single".blue(),
    }
}

/// Print one planned operation, with the file count for tree operations.
pub fn print_operation(operation: &Operation, file_count: Option<u64>) {
    let count = file_count.map_or_else(String::new, |n| format!(" ({n} files)"));
    println!(
        "  {} {} {} {}{}",
        kind_tag(operation.kind()),
        operation.source().display(),
        "->".dimmed(),
        operation.target().display(),
        count.dimmed()
    );
}

/// Print the totals of a merged plan.
pub fn print_plan_summary(operations: &[Operation]) {
    let trees = operations
        .iter()
        .filter(|op| op.kind() == OperationKind::Tree)
        .count();
    println!(
        "\n{} operations ({} tree, {} single)",
        operations.len(),
        trees,
        operations.len() - trees
    );
}

/// Print success message with execution totals.
pub fn print_success(summary: &ExecuteSummary) {
    println!(
        "{} Merged copy complete! {} tree, {} single, {} files copied, {} links",
        "✅",
        summary.trees,
        summary.singles,
        summary.files_copied,
        summary.links
    );
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}
