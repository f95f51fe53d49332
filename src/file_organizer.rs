/// Relocation of files and directories into category folders.
///
/// This module moves a single filesystem entry into its category directory under
/// the sorting root. Files are renamed to their normalized name and lowercased
/// extension; directories go to `others/` under their normalized name. Archives
/// are unpacked right after they land in `archives/`.
use crate::file_category::Category;
use crate::normalize::{normalize, relocation_parts};
use crate::unpack::{UnpackOutcome, unpack};
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of filesystem entry that was relocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Records a single relocation.
#[derive(Debug)]
pub struct Operation {
    /// Whether a file or a directory was moved.
    pub kind: EntryKind,
    /// The original path of the entry before relocation.
    pub original_path: PathBuf,
    /// The path the entry was moved to.
    pub new_path: PathBuf,
    /// The category folder the entry was moved into.
    pub category: Category,
    /// Set when the entry was an archive and an unpack was attempted.
    pub unpack: Option<UnpackOutcome>,
}

/// Errors that can occur while sorting a directory tree.
#[derive(Debug)]
pub enum OrganizeError {
    /// Failed to list a directory.
    ReadDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move an entry to its destination.
    MoveFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// Failed to delete a file or directory.
    RemoveFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write a manifest file.
    ManifestWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::MoveFailed {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::RemoveFailed { path, source } => {
                write!(f, "Failed to remove {}: {}", path.display(), source)
            }
            Self::ManifestWriteFailed { path, source } => {
                write!(f, "Failed to write manifest {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Moves filesystem entries into category subdirectories of a root.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Relocates one entry into its category directory under `root`.
    ///
    /// Regular files move to `<category>/<normalized stem><lowercased extension>`,
    /// replacing any file already there. Directories move to
    /// `others/<normalized name>`. Symlinks and special files are left alone and
    /// yield `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let op = FileOrganizer::relocate(Path::new("/data"), Path::new("/data/Отчёт.pdf"))?;
    /// if let Some(op) = op {
    ///     println!("{} -> {}", op.original_path.display(), op.new_path.display());
    /// }
    /// # Ok::<(), dirsort::file_organizer::OrganizeError>(())
    /// ```
    pub fn relocate(root: &Path, entry: &Path) -> OrganizeResult<Option<Operation>> {
        let file_type = match fs::symlink_metadata(entry) {
            Ok(metadata) => metadata.file_type(),
            Err(_) => return Ok(None),
        };

        if file_type.is_file() {
            Self::relocate_file(root, entry).map(Some)
        } else if file_type.is_dir() {
            Self::relocate_dir(root, entry).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Moves a regular file into its category folder, unpacking archives.
    pub fn relocate_file(root: &Path, file_path: &Path) -> OrganizeResult<Operation> {
        let (stem, extension) = relocation_parts(file_path);
        let name = normalize(&stem);
        let extension = extension.to_lowercase();
        let category = Category::from_extension(&extension);

        let category_path = Self::ensure_category_dir(root, category)?;
        let destination_path = category_path.join(format!("{}{}", name, extension));

        Self::move_entry(file_path, &destination_path)?;

        let unpack = if category == Category::Archive {
            Some(unpack(&destination_path)?)
        } else {
            None
        };

        Ok(Operation {
            kind: EntryKind::File,
            original_path: file_path.to_path_buf(),
            new_path: destination_path,
            category,
            unpack,
        })
    }

    /// Moves a directory to `others/<normalized name>`.
    ///
    /// If that directory already exists, the contents are merged into it and the
    /// source directory is removed. A directory already at its destination stays
    /// where it is.
    pub fn relocate_dir(root: &Path, dir_path: &Path) -> OrganizeResult<Operation> {
        let dir_name = dir_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = normalize(&dir_name);

        let others_path = Self::ensure_category_dir(root, Category::Other)?;
        let destination_path = others_path.join(name);

        if destination_path == dir_path {
            // Already in place, e.g. a folder inside an existing others/
        } else if destination_path.is_dir() {
            Self::merge_dir(dir_path, &destination_path)?;
        } else {
            if destination_path.exists() {
                fs::remove_file(&destination_path).map_err(|e| OrganizeError::RemoveFailed {
                    path: destination_path.clone(),
                    source: e,
                })?;
            }
            Self::move_entry(dir_path, &destination_path)?;
        }

        Ok(Operation {
            kind: EntryKind::Directory,
            original_path: dir_path.to_path_buf(),
            new_path: destination_path,
            category: Category::Other,
            unpack: None,
        })
    }

    /// Creates `<root>/<category>` if it is missing and returns its path.
    fn ensure_category_dir(root: &Path, category: Category) -> OrganizeResult<PathBuf> {
        let category_path = root.join(category.dir_name());

        if !category_path.exists() {
            fs::create_dir(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
                path: category_path.clone(),
                source: e,
            })?;
        }

        Ok(category_path)
    }

    fn move_entry(source: &Path, destination: &Path) -> OrganizeResult<()> {
        fs::rename(source, destination).map_err(|e| OrganizeError::MoveFailed {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            source_error: e,
        })
    }

    /// Moves every child of `source` into `destination`, then removes `source`.
    fn merge_dir(source: &Path, destination: &Path) -> OrganizeResult<()> {
        let entries = fs::read_dir(source).map_err(|e| OrganizeError::ReadDirFailed {
            path: source.to_path_buf(),
            source: e,
        })?;

        for entry in entries.flatten() {
            let child = entry.path();
            let target = destination.join(entry.file_name());

            if child.is_dir() && !child.is_symlink() && target.is_dir() {
                Self::merge_dir(&child, &target)?;
            } else {
                Self::move_entry(&child, &target)?;
            }
        }

        fs::remove_dir(source).map_err(|e| OrganizeError::RemoveFailed {
            path: source.to_path_buf(),
            source: e,
        })
    }
}
