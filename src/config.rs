//! Runtime configuration.
//!
//! Settings are read from an optional TOML file. Category mappings are fixed and
//! cannot be configured; the file only controls how the command line behaves.
//!
//! # Configuration File Format
//!
//! ```toml
//! [sorter]
//! default_root = "sort-goit"
//! color = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root used when none is given on the command line.
pub const DEFAULT_ROOT: &str = "sort-goit";

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".dirsortrc.toml";

/// Errors that can occur during configuration loading.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    ConfigNotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    ConfigInvalid(String),
    /// IO error while reading configuration.
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::IoError(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SorterConfig {
    #[serde(default)]
    pub sorter: SorterSettings,
}

/// The `[sorter]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SorterSettings {
    /// Directory to sort when no root argument is given.
    #[serde(default = "default_root")]
    pub default_root: PathBuf,

    /// Whether terminal output is colored. Defaults to true.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_color() -> bool {
    true
}

impl Default for SorterSettings {
    fn default() -> Self {
        Self {
            default_root: default_root(),
            color: default_color(),
        }
    }
}

impl SorterConfig {
    /// Load configuration, falling back to defaults.
    ///
    /// Looks in the following order:
    /// 1. `.dirsortrc.toml` in the current directory
    /// 2. `~/.config/dirsort/config.toml`
    /// 3. Built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("dirsort")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if file does not exist.
    /// Returns `ConfigError::ConfigInvalid` if TOML parsing fails.
    /// Returns `ConfigError::IoError` if file cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))
    }

    /// Picks the root to sort: the explicit argument if given, else the
    /// configured default.
    pub fn resolve_root(&self, argument: Option<PathBuf>) -> PathBuf {
        argument.unwrap_or_else(|| self.sorter.default_root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SorterConfig::default();
        assert_eq!(config.sorter.default_root, PathBuf::from("sort-goit"));
        assert!(config.sorter.color);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SorterConfig::from_toml("").expect("Empty config is valid");
        assert_eq!(config.sorter.default_root, PathBuf::from(DEFAULT_ROOT));
        assert!(config.sorter.color);
    }

    #[test]
    fn test_parse_settings() {
        let config = SorterConfig::from_toml(
            r#"
[sorter]
default_root = "/tmp/inbox"
color = false
"#,
        )
        .expect("Config should parse");

        assert_eq!(config.sorter.default_root, PathBuf::from("/tmp/inbox"));
        assert!(!config.sorter.color);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = SorterConfig::from_toml("[sorter\ncolor = ");
        assert!(matches!(result, Err(ConfigError::ConfigInvalid(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = SorterConfig::load_from_file(&temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[sorter]\ncolor = false\n").unwrap();

        let config = SorterConfig::load_from_file(&path).expect("Config should load");
        assert!(!config.sorter.color);
        assert_eq!(config.sorter.default_root, PathBuf::from(DEFAULT_ROOT));
    }

    #[test]
    fn test_resolve_root_prefers_argument() {
        let config = SorterConfig::default();
        assert_eq!(
            config.resolve_root(Some(PathBuf::from("inbox"))),
            PathBuf::from("inbox")
        );
        assert_eq!(config.resolve_root(None), PathBuf::from("sort-goit"));
    }
}
