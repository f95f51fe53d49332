//! Archive extraction.
//!
//! Archives are unpacked into a sibling directory named after the archive stem
//! and the archive file is removed afterwards, whether or not extraction
//! succeeded. Extraction failures are handed back as
//! [`UnpackOutcome::FailedIgnored`] instead of being propagated; only a failure
//! to remove the archive itself is an error.

use crate::file_organizer::{OrganizeError, OrganizeResult};
use crate::normalize::raw_stem;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

/// Offset and value of the POSIX tar magic in the first header block.
const TAR_MAGIC_OFFSET: usize = 257;
const TAR_MAGIC: &[u8] = b"ustar";
const TAR_BLOCK_SIZE: usize = 512;

/// Archive formats the unpacker understands, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    Gzip,
}

impl ArchiveFormat {
    /// Infers the format from the archive's extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        match extension.as_str() {
            "zip" => Some(ArchiveFormat::Zip),
            "tar" => Some(ArchiveFormat::Tar),
            "gz" => Some(ArchiveFormat::Gzip),
            _ => None,
        }
    }
}

/// Reasons an archive could not be extracted.
#[derive(Debug)]
pub enum UnpackError {
    /// The extension does not name a supported format.
    UnsupportedFormat(PathBuf),
    /// The archive contents are not valid for the inferred format.
    Corrupt { path: PathBuf, reason: String },
    /// Reading the archive or writing its contents failed.
    Io { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for UnpackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(path) => {
                write!(f, "Unsupported archive format: {}", path.display())
            }
            Self::Corrupt { path, reason } => {
                write!(f, "Corrupt archive {}: {}", path.display(), reason)
            }
            Self::Io { path, source } => {
                write!(f, "I/O error unpacking {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for UnpackError {}

/// Result of unpacking one archive.
///
/// The archive file is gone in both cases.
#[derive(Debug)]
pub enum UnpackOutcome {
    /// Contents were written to the target directory.
    Extracted { destination: PathBuf },
    /// Extraction failed and the error was deliberately discarded.
    FailedIgnored(UnpackError),
}

impl UnpackOutcome {
    pub fn is_extracted(&self) -> bool {
        matches!(self, UnpackOutcome::Extracted { .. })
    }
}

/// Directory an archive unpacks into: its stem, next to the archive.
pub fn unpack_destination(archive_path: &Path) -> PathBuf {
    let parent = archive_path.parent().unwrap_or_else(|| Path::new(""));
    parent.join(raw_stem(archive_path))
}

/// Extracts `archive_path` next to itself, then deletes the archive.
///
/// Partially extracted contents are left in place when extraction fails.
///
/// # Errors
///
/// Returns an error only if the archive file cannot be removed.
pub fn unpack(archive_path: &Path) -> OrganizeResult<UnpackOutcome> {
    let destination = unpack_destination(archive_path);

    let outcome = match extract(archive_path, &destination) {
        Ok(()) => UnpackOutcome::Extracted { destination },
        Err(e) => UnpackOutcome::FailedIgnored(e),
    };

    fs::remove_file(archive_path).map_err(|e| OrganizeError::RemoveFailed {
        path: archive_path.to_path_buf(),
        source: e,
    })?;

    Ok(outcome)
}

fn extract(archive_path: &Path, destination: &Path) -> Result<(), UnpackError> {
    let format = ArchiveFormat::from_path(archive_path)
        .ok_or_else(|| UnpackError::UnsupportedFormat(archive_path.to_path_buf()))?;

    let io_error = |source: io::Error| UnpackError::Io {
        path: archive_path.to_path_buf(),
        source,
    };

    let file = File::open(archive_path).map_err(io_error)?;
    fs::create_dir_all(destination).map_err(io_error)?;

    match format {
        ArchiveFormat::Zip => extract_zip(archive_path, file, destination),
        ArchiveFormat::Tar => tar::Archive::new(file)
            .unpack(destination)
            .map_err(io_error),
        ArchiveFormat::Gzip => extract_gzip(archive_path, file, destination),
    }
}

fn extract_zip(archive_path: &Path, file: File, destination: &Path) -> Result<(), UnpackError> {
    let corrupt = |e: zip::result::ZipError| UnpackError::Corrupt {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    };
    let io_error = |source: io::Error| UnpackError::Io {
        path: archive_path.to_path_buf(),
        source,
    };

    let mut archive = zip::ZipArchive::new(file).map_err(corrupt)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(corrupt)?;
        // Entries with absolute or `..` paths are skipped
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            continue;
        };
        let outpath = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath).map_err(io_error)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
            let mut outfile = File::create(&outpath).map_err(io_error)?;
            io::copy(&mut entry, &mut outfile).map_err(io_error)?;
        }
    }

    Ok(())
}

/// Gunzips the archive; tarballs are unpacked, anything else is written as a
/// single file named from the gzip header or the archive stem.
fn extract_gzip(archive_path: &Path, file: File, destination: &Path) -> Result<(), UnpackError> {
    let io_error = |source: io::Error| UnpackError::Io {
        path: archive_path.to_path_buf(),
        source,
    };

    let mut decoder = GzDecoder::new(file);
    let mut head = Vec::with_capacity(TAR_BLOCK_SIZE);
    (&mut decoder)
        .take(TAR_BLOCK_SIZE as u64)
        .read_to_end(&mut head)
        .map_err(|e| UnpackError::Corrupt {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if is_tar(&head) {
        return tar::Archive::new(Cursor::new(head).chain(decoder))
            .unpack(destination)
            .map_err(io_error);
    }

    let file_name = decoder
        .header()
        .and_then(|header| header.filename())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .and_then(|name| {
            Path::new(&name)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| raw_stem(archive_path));

    let mut outfile = File::create(destination.join(file_name)).map_err(io_error)?;
    io::copy(&mut Cursor::new(head).chain(decoder), &mut outfile).map_err(io_error)?;
    Ok(())
}

fn is_tar(data: &[u8]) -> bool {
    data.get(TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + TAR_MAGIC.len()) == Some(TAR_MAGIC)
}
