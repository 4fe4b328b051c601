//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for copy-merge.
#[derive(Debug, Parser)]
#[command(
    name = "copy-merge",
    about = "Merge many directory copies into the fewest filesystem operations",
    version
)]
pub struct Args {
    /// Copies to schedule, as SOURCE=TARGET pairs.
    #[arg(value_name = "SOURCE=TARGET", value_parser = parse_mapping)]
    pub mappings: Vec<(PathBuf, PathBuf)>,

    /// Plan file to load (defaults to the nearest copy-merge.toml).
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Symlink instead of copying.
    #[arg(long)]
    pub link: bool,

    /// Print the merged plan and exit without writing anything.
    #[arg(long)]
    pub plan: bool,

    /// Print the merged plan as JSON and exit.
    #[arg(long)]
    pub json: bool,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Determine if we should only print the plan.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.plan || self.json
    }

    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

/// Parse a `SOURCE=TARGET` pair.
fn parse_mapping(value: &str) -> Result<(PathBuf, PathBuf), String> {
    let (source, target) = value
        .split_once('=')
        .ok_or_else(|| format!("expected SOURCE=TARGET, got `{value}`"))?;

    if source.is_empty() || target.is_empty() {
        return Err(format!("empty path in `{value}`"));
    }

    Ok((PathBuf::from(source), PathBuf::from(target)))
}
