//! dirsort - recursively sort a directory tree into category folders
//!
//! This library classifies files by extension, normalizes their names to ASCII,
//! moves them into `documents`, `images`, `audio`, `video`, `archives` or
//! `others` under the root, unpacks archives, folds subdirectories into
//! `others/` and writes manifest files describing what it saw.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod manifest;
pub mod normalize;
pub mod output;
pub mod sorter;
pub mod unpack;

pub use config::{ConfigError, SorterConfig};
pub use file_category::Category;
pub use file_organizer::{EntryKind, FileOrganizer, Operation, OrganizeError, OrganizeResult};
pub use normalize::normalize;
pub use sorter::{SortReport, sort};
pub use unpack::{UnpackError, UnpackOutcome, unpack};

pub use cli::{Cli, run_cli};
