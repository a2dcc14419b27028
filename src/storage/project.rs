//! Workspace access
//!
//! Resolves configuration and the data directory, and provides access to
//! the year store.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::{Config, YearStore};
use crate::domain::{augment_with, CalendarOptions, LiturgicalEvent};
use crate::feed::TranslationTable;

/// Configuration plus the store it points at
pub struct Workspace {
    config: Config,
    data_dir: PathBuf,
}

impl Workspace {
    /// Opens a workspace from an optional config file and data directory override
    pub fn open(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Self::with_config(config, data_dir)
    }

    /// Opens a workspace around an already loaded configuration
    pub fn with_config(config: Config, data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = config.data_dir(data_dir)?;
        debug!(data_dir = %data_dir.display(), "opened workspace");
        Ok(Self { config, data_dir })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> YearStore {
        YearStore::new(&self.data_dir)
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.config.calendar
    }

    /// Name table configured for feed ingestion
    pub fn translation_table(&self) -> Result<TranslationTable> {
        self.config.feed.translation_table()
    }

    /// Stored events of `year`, or an error naming the missing year
    pub fn require_year(&self, year: i32) -> Result<Vec<LiturgicalEvent>> {
        self.store().read(year)?.ok_or_else(|| {
            anyhow::anyhow!(
                "No data for {}. Import a feed covering it with 'litcal import'.",
                year
            )
        })
    }

    /// Stored events of `year` with weekdays filled in
    pub fn augmented_year(&self, year: i32) -> Result<Vec<LiturgicalEvent>> {
        let events = self.require_year(year)?;
        Ok(augment_with(&events, self.options()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn data_dir_override_wins() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::with_config(Config::default(), Some(dir.path())).unwrap();
        assert_eq!(workspace.data_dir(), dir.path());
        assert_eq!(workspace.store().dir(), dir.path());
    }

    #[test]
    fn open_with_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        let data = dir.path().join("data");
        std::fs::write(
            &config_path,
            format!("[storage]\ndata_dir = {:?}\n", data.display().to_string()),
        )
        .unwrap();

        let workspace = Workspace::open(Some(&config_path), None).unwrap();
        assert_eq!(workspace.data_dir(), data.as_path());
    }

    #[test]
    fn missing_year_is_an_error() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::with_config(Config::default(), Some(dir.path())).unwrap();

        let err = workspace.require_year(2024).unwrap_err();
        assert!(err.to_string().contains("No data for 2024"));
    }

    #[test]
    fn stored_year_is_read() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::with_config(Config::default(), Some(dir.path())).unwrap();
        let events = vec![LiturgicalEvent::new(
            "Św. Józefa",
            NaiveDate::from_ymd_opt(2024, 3, 19).unwrap(),
        )];
        workspace.store().write(2024, &events).unwrap();

        assert_eq!(workspace.require_year(2024).unwrap(), events);
        // No anchors, so nothing is added
        assert_eq!(workspace.augmented_year(2024).unwrap(), events);
    }
}
