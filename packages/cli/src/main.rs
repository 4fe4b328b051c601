//! copy-merge CLI entry point.
//!
//! Schedules every requested directory copy, merges the plan into the
//! fewest filesystem operations and applies it.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

use args::Args;
use copy_merge_config::{LoadedConfig, discover_config, load_config};
use copy_merge_copier::{Copier, OperationKind};
use copy_merge_copy::count_files;
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;

    let config = find_config(args, &cwd)?;
    if let Some(loaded) = &config {
        log::debug!("Using config {}", loaded.config_path.display());
    }

    let mappings = collect_mappings(args, config.as_ref(), &cwd);
    for (source, target) in &mappings {
        log::debug!("Mapping {} -> {}", source.display(), target.display());
    }

    if mappings.is_empty() {
        println!("Nothing to copy.");
        println!("Pass SOURCE=TARGET pairs or create a copy-merge.toml file.");
        return Ok(());
    }

    let link = args.link || config.as_ref().is_some_and(|c| c.config.link);
    let mut copier = Copier::new(link);

    for (source, target) in &mappings {
        copier.copy(source, target)?;
    }
    copier.merge();

    if args.json {
        println!("{}", serde_json::to_string_pretty(copier.operations())?);
        return Ok(());
    }

    output::print_header("Copy Merge");
    if let Some(loaded) = &config {
        output::print_config_info(
            &loaded.config_path.to_string_lossy(),
            &loaded.config.description,
        );
        println!();
    }

    if args.plan {
        for operation in copier.operations() {
            let file_count = (operation.kind() == OperationKind::Tree)
                .then(|| count_files(operation.source()));
            output::print_operation(operation, file_count);
        }
        output::print_plan_summary(copier.operations());
        return Ok(());
    }

    if link && !copy_merge_copy::SYMLINKS_SUPPORTED {
        output::print_warning("Symlinks are not supported on this platform, copying instead");
    }

    let progress_mgr = ProgressManager::new(
        args.should_show_progress(),
        copier.operations().len() as u64,
    );
    let summary = copier.execute_with_progress(|progress| progress_mgr.update(progress));
    progress_mgr.finish();
    let summary = summary?;

    println!();
    output::print_success(&summary);
    Ok(())
}

/// Load the plan file named with `--config`, or the nearest discovered
/// one when no mappings were passed on the command line.
fn find_config(
    args: &Args,
    cwd: &Path,
) -> Result<Option<LoadedConfig>, Box<dyn std::error::Error>> {
    let path = match &args.config {
        Some(path) => Some(absolute(path, cwd)),
        None if args.mappings.is_empty() => discover_config(cwd),
        None => None,
    };

    Ok(path.map(|path| load_config(&path)).transpose()?)
}

/// Plan file mappings followed by command-line mappings, all absolute.
fn collect_mappings(
    args: &Args,
    config: Option<&LoadedConfig>,
    cwd: &Path,
) -> Vec<(PathBuf, PathBuf)> {
    let mut mappings = config.map(LoadedConfig::resolved_mappings).unwrap_or_default();

    mappings.extend(
        args.mappings
            .iter()
            .map(|(source, target)| (absolute(source, cwd), absolute(target, cwd))),
    );

    mappings
}

/// Resolve `path` against `cwd` and clean it.
fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    path_clean::clean(cwd.join(path))
}
