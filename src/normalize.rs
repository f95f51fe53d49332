//! Filename normalization.
//!
//! Stems are transliterated from Cyrillic to Latin and then every run of
//! characters outside `[A-Za-z0-9]` is collapsed to a single underscore.
//!
//! ```
//! use dirsort::normalize::normalize;
//!
//! assert_eq!(normalize("Привет"), "Privet");
//! assert_eq!(normalize("Отчёт 2023"), "Otchet_2023");
//! assert_eq!(normalize("..."), "_");
//! ```

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid separator regex"));

/// Latin spelling of a lowercase Cyrillic letter.
fn latin_for(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// Transliterates Cyrillic letters to Latin, passing everything else through.
///
/// An uppercase letter only capitalizes the first letter of its replacement,
/// so `Щ` becomes `Shch`.
pub fn transliterate(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        let mut lower = c.to_lowercase();
        let mapped = match (lower.next(), lower.next()) {
            (Some(single), None) => latin_for(single),
            _ => None,
        };

        match mapped {
            Some(latin) if c.is_uppercase() => {
                let mut letters = latin.chars();
                if let Some(first) = letters.next() {
                    result.extend(first.to_uppercase());
                    result.push_str(letters.as_str());
                }
            }
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }

    result
}

/// Normalizes a filename stem to an ASCII identifier.
///
/// Never fails; an empty stem normalizes to an empty string.
pub fn normalize(stem: &str) -> String {
    let transliterated = transliterate(stem);
    NON_ALPHANUMERIC
        .replace_all(&transliterated, "_")
        .into_owned()
}

/// Extension of the final path component, with its leading dot.
///
/// Returns an empty string when the name has no extension. Case is kept.
pub fn raw_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Final path component without its extension.
pub fn raw_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Splits the final path component into the stem and extension used to name
/// a relocated file.
///
/// Unlike [`raw_extension`], a trailing dot does not start an extension:
/// `file.` splits into `("file.", "")`. A leading dot never does either.
pub fn relocation_parts(path: &Path) -> (String, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => {
            let (stem, extension) = name.split_at(dot);
            (stem.to_string(), extension.to_string())
        }
        _ => (name, String::new()),
    }
}
