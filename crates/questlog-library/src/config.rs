//! Configuration management for Questlog
//!
//! TOML-based configuration covering the collection data directory, the
//! default entry mode, and catalog search settings.

use crate::options::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No configuration directory available")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Catalog search client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the metadata catalog
    pub endpoint: String,

    /// Bearer token, when the catalog requires one
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.igdb.com/v4".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Main Questlog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the collection snapshot lives
    pub data_dir: PathBuf,

    /// Entry mode selected when a session starts
    #[serde(default)]
    pub default_mode: Mode,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_mode: Mode::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the platform config directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = default_config_path()
            && path.exists()
        {
            return Self::load(&path);
        }

        tracing::warn!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Save to the platform config directory.
    pub fn save_default(&self) -> Result<(), ConfigError> {
        let path = default_config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", "questlog", "questlog")
}

fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Platform data directory; the working directory when the platform
/// reports no home.
fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.default_mode, Mode::Auto);
        assert_eq!(config.search.endpoint, "https://api.igdb.com/v4");
        assert!(config.search.api_key.is_none());
        assert_eq!(config.search.timeout_secs, 30);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
data_dir = "/home/player/.local/share/questlog"
default_mode = "manual"

[search]
endpoint = "https://catalog.example.com/v1"
timeout_secs = 10
"#;
        write!(temp_file, "{}", config_content).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/player/.local/share/questlog")
        );
        assert_eq!(config.default_mode, Mode::Manual);
        assert_eq!(config.search.endpoint, "https://catalog.example.com/v1");
        assert_eq!(config.search.timeout_secs, 10);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "data_dir = \"/tmp/questlog\"").unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.default_mode, Mode::Auto);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.default_mode = Mode::Manual;
        config.search.api_key = Some("secret".to_string());

        config.save(temp_file.path()).unwrap();
        let loaded = Config::load(temp_file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "data_dir = [not toml").unwrap();

        assert!(matches!(
            Config::load(temp_file.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NoConfigDir;
        assert!(format!("{}", err).contains("configuration directory"));
    }
}
