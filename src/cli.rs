//! Command-line interface module for dirsort.
//!
//! Parses the single optional root argument, loads configuration and drives
//! one sorting run.

use crate::config::SorterConfig;
use crate::output::OutputFormatter;
use crate::sorter::{self, SortReport};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Sort a directory tree into documents, images, audio, video, archives and others.
#[derive(Debug, Parser)]
#[command(name = "dirsort", version, about)]
pub struct Cli {
    /// Directory to sort. Defaults to the configured root ("sort-goit").
    pub root: Option<PathBuf>,
}

/// Runs the CLI application for parsed arguments.
///
/// Loads configuration, resolves the root and sorts it.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use dirsort::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["dirsort", "/path/to/inbox"]);
/// if let Err(e) = run_cli(cli) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(cli: Cli) -> Result<(), String> {
    let config = SorterConfig::load().map_err(|e| format!("Error loading configuration: {}", e))?;
    OutputFormatter::set_color(config.sorter.color);

    let root = config.resolve_root(cli.root);
    sort_directory(&root).map(|_| ())
}

/// Sorts `root` in place and prints a summary.
pub fn sort_directory(root: &Path) -> Result<SortReport, String> {
    OutputFormatter::info(&format!("Sorting contents of: {}", root.display()));

    let report = sorter::sort(root).map_err(|e| e.to_string())?;

    OutputFormatter::summary_table(&report);
    OutputFormatter::success("Sorting complete!");

    Ok(report)
}
