//! Configuration module for svenskdb
//!
//! Manages display preferences, the dataset location and the log level.
//! Configuration is stored in the user's config directory.

use crate::flag::FlagStyle;
use crate::hierarchy::TierOrder;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default `tracing` filter when neither the config nor `SVENSKDB_LOG` set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Keys accepted by `svenskdb config get/set`
pub const KEYS: [&str; 5] = ["quiet", "dataset", "tier_order", "flag_style", "log_level"];

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SvdbConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Brand dataset to load instead of the bundled register
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Vertical order of parent company and owner in hierarchy trees
    #[serde(default)]
    pub tier_order: TierOrder,

    /// How country codes are drawn
    #[serde(default)]
    pub flag_style: FlagStyle,

    /// `tracing` filter directive (e.g. "info", "svenskdb=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SvdbConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            dataset: None,
            tier_order: TierOrder::default(),
            flag_style: FlagStyle::default(),
            log_level: default_log_level(),
        }
    }
}

impl SvdbConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("svenskdb").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating default if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    ///
    /// See [`SvdbConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        tracing::debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Current value of a key, formatted for display
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "quiet" => self.quiet.to_string(),
            "dataset" => self
                .dataset
                .as_ref()
                .map_or_else(|| "(bundled)".to_string(), |p| p.display().to_string()),
            "tier_order" => self.tier_order.to_string(),
            "flag_style" => self.flag_style.to_string(),
            "log_level" => self.log_level.clone(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Update a key from its text form (does not save)
    ///
    /// An empty `dataset` value resets to the bundled register.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values that don't parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("Invalid boolean '{value}'")))?;
            }
            "dataset" => {
                self.dataset = (!value.trim().is_empty()).then(|| PathBuf::from(value.trim()));
            }
            "tier_order" => self.tier_order = value.parse().map_err(ConfigError::Message)?,
            "flag_style" => self.flag_style = value.parse().map_err(ConfigError::Message)?,
            "log_level" => {
                if value.trim().is_empty() {
                    return Err(ConfigError::Message("Log level cannot be empty".to_string()));
                }
                self.log_level = value.trim().to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown config key '{key}'. Valid keys: {}",
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SvdbConfig::default();
        assert!(!config.quiet);
        assert!(config.dataset.is_none());
        assert_eq!(config.tier_order, TierOrder::ParentFirst);
        assert_eq!(config.flag_style, FlagStyle::Emoji);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = SvdbConfig::load_from(&path).unwrap();
        assert_eq!(config, SvdbConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = SvdbConfig::default();
        config.set("tier_order", "owner-first").unwrap();
        config.set("flag_style", "code").unwrap();
        config.set("dataset", "/tmp/brands.json").unwrap();
        config.set("quiet", "true").unwrap();
        config.save_to(&path).unwrap();

        let loaded = SvdbConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get("tier_order").unwrap(), "owner-first");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "flag_style = \"code\"\n").unwrap();

        let config = SvdbConfig::load_from(&path).unwrap();
        assert_eq!(config.flag_style, FlagStyle::Code);
        assert_eq!(config.tier_order, TierOrder::ParentFirst);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = SvdbConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("tier_order", "sideways").is_err());
        assert!(config.set("log_level", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, SvdbConfig::default());
    }

    #[test]
    fn test_empty_dataset_resets_to_bundled() {
        let mut config = SvdbConfig::default();
        config.set("dataset", "data.json").unwrap();
        assert_eq!(config.dataset, Some(PathBuf::from("data.json")));
        config.set("dataset", "").unwrap();
        assert!(config.dataset.is_none());
        assert_eq!(config.get("dataset").unwrap(), "(bundled)");
    }
}
