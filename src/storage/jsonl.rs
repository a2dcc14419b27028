//! JSONL storage for yearly event lists
//!
//! Each civil year lives in `<data_dir>/<year>.jsonl` with one event per
//! line. Readers and writers coordinate through `<year>.jsonl.lock`, which
//! stays in place while the data file itself is replaced by rename.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use fs2::FileExt;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::LiturgicalEvent;

const EXTENSION: &str = "jsonl";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Event '{name}' on {date} does not belong to year {year}")]
    YearMismatch {
        name: String,
        date: NaiveDate,
        year: i32,
    },
}

/// Groups events by civil year, keeping their relative order
pub fn group_by_year(events: Vec<LiturgicalEvent>) -> BTreeMap<i32, Vec<LiturgicalEvent>> {
    let mut years: BTreeMap<i32, Vec<LiturgicalEvent>> = BTreeMap::new();
    for event in events {
        years.entry(event.date.year()).or_default().push(event);
    }
    years
}

/// Store for per-year event lists in JSONL format
pub struct YearStore {
    dir: PathBuf,
}

impl YearStore {
    /// Creates a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `year`
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{}.{}", year, EXTENSION))
    }

    /// Path of the lock file guarding `year`
    pub fn lock_path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{}.{}.lock", year, EXTENSION))
    }

    /// Opens the lock file of `year` and locks it, shared or exclusive
    ///
    /// The lock is released when the returned file is dropped.
    fn lock(&self, year: i32, exclusive: bool) -> Result<File> {
        let path = self.lock_path_for(year);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;

        if exclusive {
            file.lock_exclusive()
                .with_context(|| format!("Failed to acquire write lock on {}", path.display()))?;
        } else {
            file.lock_shared()
                .with_context(|| format!("Failed to acquire read lock on {}", path.display()))?;
        }
        Ok(file)
    }

    /// Returns true if `year` has been stored
    pub fn is_available(&self, year: i32) -> bool {
        self.path_for(year).is_file()
    }

    /// Reads the events of one year, or `None` if it was never stored
    pub fn read(&self, year: i32) -> Result<Option<Vec<LiturgicalEvent>>> {
        let path = self.path_for(year);
        if !path.exists() {
            return Ok(None);
        }

        let _lock = self.lock(year, false)?;
        let file = File::open(&path)
            .with_context(|| format!("Failed to open year file: {}", path.display()))?;

        let reader = BufReader::new(&file);
        let mut events = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let event: LiturgicalEvent = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse event at line {}", line_num + 1))?;

            events.push(event);
        }

        debug!(year, events = events.len(), "read year");
        Ok(Some(events))
    }

    /// Reads several years into one list, skipping the ones not stored
    pub fn read_years(&self, years: impl IntoIterator<Item = i32>) -> Result<Vec<LiturgicalEvent>> {
        let mut events = Vec::new();
        for year in years {
            if let Some(stored) = self.read(year)? {
                events.extend(stored);
            }
        }
        Ok(events)
    }

    /// Replaces the stored events of `year`
    pub fn write(&self, year: i32, events: &[LiturgicalEvent]) -> Result<()> {
        if let Some(stray) = events.iter().find(|e| e.date.year() != year) {
            return Err(StoreError::YearMismatch {
                name: stray.name.clone(),
                date: stray.date,
                year,
            }
            .into());
        }

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let path = self.path_for(year);
        let temp_path = path.with_extension(format!("{}.tmp", EXTENSION));

        // Held until the rename is done
        let _lock = self.lock(year, true)?;
        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);
            for event in events {
                let line = serde_json::to_string(event).context("Failed to serialize event")?;
                writeln!(writer, "{}", line).context("Failed to write event")?;
            }

            writer.flush().context("Failed to flush year file")?;
        }

        fs::rename(&temp_path, &path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        info!(year, events = events.len(), path = %path.display(), "stored year");
        Ok(())
    }

    /// Stored years in ascending order
    pub fn available_years(&self) -> Result<Vec<i32>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to list directory: {}", self.dir.display()))?;

        let mut years = Vec::new();
        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(year) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<i32>().ok())
            {
                years.push(year);
            }
        }

        years.sort_unstable();
        Ok(years)
    }

    /// Deletes every stored year, returning how many were removed
    pub fn clear(&self) -> Result<usize> {
        let years = self.available_years()?;
        for &year in &years {
            let _lock = self.lock(year, true)?;
            let path = self.path_for(year);
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete {}", path.display()))?;
        }

        info!(years = years.len(), "cleared stored years");
        Ok(years.len())
    }
}
