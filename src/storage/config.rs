//! Configuration handling for litcal
//!
//! Configuration is stored in the platform config directory
//! (`~/.config/litcal/config.toml` on Linux) or in a file passed with
//! `--config`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::CalendarOptions;
use crate::feed::TranslationTable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Feed ingestion settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    /// Extra name table merged over the built-in one
    pub translations: Option<PathBuf>,

    /// Start from the built-in name table
    pub builtin_translations: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            translations: None,
            builtin_translations: true,
        }
    }
}

impl FeedConfig {
    /// Builds the name table these settings describe
    pub fn translation_table(&self) -> Result<TranslationTable> {
        let mut table = if self.builtin_translations {
            TranslationTable::builtin()
        } else {
            TranslationTable::new()
        };

        if let Some(path) = &self.translations {
            table.merge(TranslationTable::load(path)?);
        }

        Ok(table)
    }
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the yearly event files
    pub data_dir: Option<PathBuf>,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Calendar computation settings
    pub calendar: CalendarOptions,

    /// Feed settings
    pub feed: FeedConfig,

    /// Storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates a TOML document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.storage.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("storage.data_dir is empty".to_string()));
            }
        }
        Ok(())
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "litcal", "litcal")
    }

    /// Default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Platform data directory used when nothing else is configured
    pub fn default_data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Resolves the data directory: explicit override, then config, then platform default
    pub fn data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.storage.data_dir.clone())
            .or_else(Self::default_data_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory; pass --data-dir"))
    }

    /// Writes the configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
