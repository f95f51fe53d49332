//! Manifest files written at the sorting root.
//!
//! Each directory level produces its own manifest and writes it over the
//! previous one, so after a full run the files describe only the level that
//! finished last.

use crate::file_category::is_known_extension;
use crate::file_organizer::{OrganizeError, OrganizeResult};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const ALL_FILES: &str = "all_files.txt";
pub const KNOWN_EXTENSIONS: &str = "known_extensions.txt";
pub const UNKNOWN_EXTENSIONS: &str = "unknown_extensions.txt";

/// Names and extensions seen directly inside one directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Original file names, in the order they were processed.
    pub all_files: Vec<String>,
    /// Extensions found verbatim in the category table.
    pub known_extensions: BTreeSet<String>,
    /// Every other extension, including the empty one.
    pub unknown_extensions: BTreeSet<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file by its original name and raw extension.
    ///
    /// The extension is matched case-sensitively, so `.PDF` lands in the
    /// unknown set.
    pub fn record(&mut self, file_name: &str, extension: &str) {
        self.all_files.push(file_name.to_string());
        if is_known_extension(extension) {
            self.known_extensions.insert(extension.to_string());
        } else {
            self.unknown_extensions.insert(extension.to_string());
        }
    }

    /// Writes the three manifest files into `root`, replacing their contents.
    pub fn write(&self, root: &Path) -> OrganizeResult<()> {
        write_lines(&root.join(ALL_FILES), &self.all_files)?;
        write_lines(&root.join(KNOWN_EXTENSIONS), &self.known_extensions)?;
        write_lines(&root.join(UNKNOWN_EXTENSIONS), &self.unknown_extensions)
    }
}

fn write_lines<'a, I>(path: &Path, lines: I) -> OrganizeResult<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let content: String = lines.into_iter().map(|line| format!("{}\n", line)).collect();
    fs::write(path, content).map_err(|e| OrganizeError::ManifestWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
