//! # Storage Layer
//!
//! Persistence for imported calendars and user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Events | JSONL (one JSON per line) | `<data_dir>/<year>.jsonl` |
//! | Config | TOML | `<config_dir>/config.toml` |
//! | Extra names | TOML `[names]` table | `feed.translations` |
//!
//! ## Concurrency Safety
//!
//! - [`YearStore`] uses file locking (`fs2`) for concurrent access
//! - All writes are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`Workspace`] - Entry point: configuration plus data directory
//! - [`YearStore`] - Read/write yearly event lists as JSONL
//! - [`Config`] - User configuration

mod config;
mod jsonl;
mod project;

pub use config::{Config, ConfigError, FeedConfig, OutputFormat, StorageConfig};
pub use jsonl::{group_by_year, StoreError, YearStore};
pub use project::Workspace;
