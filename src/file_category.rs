//! Extension-based file categorization.
//!
//! Every file is sorted into one of six categories. Five of them are backed by a
//! fixed extension table; anything the table does not know falls into
//! [`Category::Other`].
//!
//! # Examples
//!
//! ```
//! use dirsort::file_category::Category;
//!
//! assert_eq!(Category::from_extension(".PDF"), Category::Document);
//! assert_eq!(Category::from_extension(".png"), Category::Image);
//! assert_eq!(Category::from_extension(".xyz"), Category::Other);
//! ```

/// Represents a broad file category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Document files (PDF, DOCX, TXT, etc.)
    Document,
    /// Image files (PNG, JPG, SVG, etc.)
    Image,
    /// Audio files (MP3, OGG, WAV, AMR)
    Audio,
    /// Video files (AVI, MP4, MOV, MKV)
    Video,
    /// Archive files (ZIP, GZ, TAR)
    Archive,
    /// Unknown or uncategorized files, and relocated directories
    Other,
}

/// Extension table, lowercase with the leading dot.
static EXTENSION_TABLE: &[(&str, Category)] = &[
    (".doc", Category::Document),
    (".docx", Category::Document),
    (".txt", Category::Document),
    (".pdf", Category::Document),
    (".xlsx", Category::Document),
    (".pptx", Category::Document),
    (".jpeg", Category::Image),
    (".png", Category::Image),
    (".jpg", Category::Image),
    (".svg", Category::Image),
    (".mp3", Category::Audio),
    (".ogg", Category::Audio),
    (".wav", Category::Audio),
    (".amr", Category::Audio),
    (".avi", Category::Video),
    (".mp4", Category::Video),
    (".mov", Category::Video),
    (".mkv", Category::Video),
    (".zip", Category::Archive),
    (".gz", Category::Archive),
    (".tar", Category::Archive),
];

impl Category {
    /// All categories, in the order their folders are listed in summaries.
    pub const ALL: [Category; 6] = [
        Category::Document,
        Category::Image,
        Category::Audio,
        Category::Video,
        Category::Archive,
        Category::Other,
    ];

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::Category;
    ///
    /// assert_eq!(Category::Image.dir_name(), "images");
    /// assert_eq!(Category::Audio.dir_name(), "audio");
    /// assert_eq!(Category::Other.dir_name(), "others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Document => "documents",
            Category::Image => "images",
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Archive => "archives",
            Category::Other => "others",
        }
    }

    /// Classifies an extension (with its leading dot), ignoring case.
    ///
    /// Extensions missing from the table classify as [`Category::Other`].
    pub fn from_extension(extension: &str) -> Category {
        Self::lookup(&extension.to_lowercase()).unwrap_or(Category::Other)
    }

    /// Returns true if `name` is the folder name of some category.
    pub fn is_category_dir(name: &str) -> bool {
        Self::ALL.iter().any(|category| category.dir_name() == name)
    }

    fn lookup(extension: &str) -> Option<Category> {
        EXTENSION_TABLE
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, category)| *category)
    }
}

/// Exact, case-sensitive membership test against the extension table.
///
/// Manifests use this rather than [`Category::from_extension`], so `.PDF` counts
/// as unknown here even though the file itself is still sorted into documents.
pub fn is_known_extension(extension: &str) -> bool {
    Category::lookup(extension).is_some()
}
