//! Feed name translation table
//!
//! User tables are TOML files with a single `[names]` table:
//!
//! ```toml
//! [names]
//! "Chrzest Pański" = "Niedziela Chrztu Pańskiego"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builtin_names::BUILTIN_NAMES;
use super::FeedError;

/// Mapping from cleaned feed names to canonical names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTable {
    #[serde(default)]
    names: HashMap<String, String>,
}

impl TranslationTable {
    /// Creates an empty table; every name passes through unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Parses a `[names]` TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, FeedError> {
        toml::from_str(content).map_err(|e| FeedError::Translations(e.to_string()))
    }

    /// Loads a table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read name table: {}", path.display()))?;

        let table = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load name table: {}", path.display()))?;

        debug!(path = %path.display(), entries = table.len(), "loaded name table");
        Ok(table)
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.names.insert(from.into(), to.into());
    }

    /// Adds all entries of `other`, replacing existing ones
    pub fn merge(&mut self, other: TranslationTable) {
        self.names.extend(other.names);
    }

    pub fn translate(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Translated name, or the input if the table has no entry
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.translate(name).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
