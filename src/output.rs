//! Output formatting and styling module.
//!
//! All terminal output goes through [`OutputFormatter`] so styling stays
//! consistent and can be switched off in one place.

use crate::file_category::Category;
use crate::sorter::SortReport;
use colored::*;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Enables or disables colored output for the rest of the process.
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Prints an error message in red with an X mark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// OutputFormatter::error("Failed to read directory sort-goit");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints the per-category summary of a finished run.
    ///
    /// Categories that received no files are omitted.
    pub fn summary_table(report: &SortReport) {
        Self::header("SUMMARY");

        let rows: Vec<(&str, usize)> = Category::ALL
            .iter()
            .filter_map(|category| {
                report
                    .files_by_category
                    .get(category)
                    .map(|count| (category.dir_name(), *count))
            })
            .collect();

        let width = rows
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8); // At least "Category" width

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = width
        );
        println!("{}", "-".repeat(width + 10));

        for (name, count) in &rows {
            println!(
                "{:<width$} | {} {}",
                name,
                count.to_string().green(),
                plural(*count, "file", "files"),
                width = width
            );
        }

        println!("{}", "-".repeat(width + 10));
        let total = report.total_files();
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total.to_string().green().bold(),
            plural(total, "file", "files"),
            width = width
        );

        if report.directories_relocated > 0 {
            println!(
                "{} {} moved to {}/",
                report.directories_relocated,
                plural(report.directories_relocated, "directory", "directories"),
                Category::Other.dir_name()
            );
        }
        if report.archives_extracted > 0 {
            println!(
                "{} {} unpacked",
                report.archives_extracted,
                plural(report.archives_extracted, "archive", "archives")
            );
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
