//! Recursive folder sorting.
//!
//! Walks a directory depth-first, relocating every file into the category
//! folders under the root. Subdirectories are sorted first and then moved to
//! `others/`. Each directory level writes its manifest to the root when it
//! finishes.

use crate::file_category::Category;
use crate::file_organizer::{EntryKind, FileOrganizer, Operation, OrganizeError, OrganizeResult};
use crate::manifest::Manifest;
use crate::normalize::raw_extension;
use crate::unpack::{UnpackError, UnpackOutcome};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Totals collected over one run.
#[derive(Debug, Default)]
pub struct SortReport {
    /// Files moved, per category.
    pub files_by_category: HashMap<Category, usize>,
    /// Directories moved into `others/`.
    pub directories_relocated: usize,
    /// Archives unpacked successfully.
    pub archives_extracted: usize,
    /// Archives that were deleted without being unpacked.
    pub unpack_failures: Vec<(PathBuf, UnpackError)>,
}

impl SortReport {
    pub fn total_files(&self) -> usize {
        self.files_by_category.values().sum()
    }

    fn record(&mut self, operation: Operation) {
        if operation.kind == EntryKind::Directory {
            if operation.new_path != operation.original_path {
                self.directories_relocated += 1;
            }
            return;
        }

        *self
            .files_by_category
            .entry(operation.category)
            .or_insert(0) += 1;

        match operation.unpack {
            Some(UnpackOutcome::Extracted { .. }) => self.archives_extracted += 1,
            Some(UnpackOutcome::FailedIgnored(e)) => {
                self.unpack_failures.push((operation.new_path, e));
            }
            None => {}
        }
    }
}

/// Sorts the whole tree under `root` in place.
///
/// # Errors
///
/// Any filesystem error other than a failed archive extraction aborts the run,
/// leaving the tree partially sorted.
pub fn sort(root: &Path) -> OrganizeResult<SortReport> {
    let mut report = SortReport::default();
    sort_folder(root, root, &mut report)?;
    Ok(report)
}

/// Sorts the direct children of `dir`, recursing into subdirectories.
///
/// Category folders directly under the root are sorted like any other folder
/// but stay where they are afterwards.
pub fn sort_folder(root: &Path, dir: &Path, report: &mut SortReport) -> OrganizeResult<()> {
    let mut manifest = Manifest::new();

    for entry in snapshot(dir)? {
        // Entries can vanish mid-walk, e.g. an archive replaced and then unpacked
        let file_type = match fs::symlink_metadata(&entry) {
            Ok(metadata) => metadata.file_type(),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(OrganizeError::ReadDirFailed {
                    path: entry.clone(),
                    source: e,
                });
            }
        };
        let file_name = entry
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if file_type.is_file() {
            manifest.record(&file_name, &raw_extension(&entry));
        } else if file_type.is_dir() {
            sort_folder(root, &entry, report)?;
            if dir == root && Category::is_category_dir(&file_name) {
                continue;
            }
        }

        if let Some(operation) = FileOrganizer::relocate(root, &entry)? {
            report.record(operation);
        }
    }

    manifest.write(root)
}

/// Lists the entries of `dir` up front, sorted by name, so relocation does not
/// disturb the iteration.
fn snapshot(dir: &Path) -> OrganizeResult<Vec<PathBuf>> {
    let read_dir_failed = |e: std::io::Error| OrganizeError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_dir_failed)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_failed)?;
    entries.sort();
    Ok(entries)
}
