//! Event feed ingestion
//!
//! Turns a raw ICS calendar into [`LiturgicalEvent`](crate::domain::LiturgicalEvent)s
//! with canonical names.

mod builtin_names;
mod ics;
mod translation;

use thiserror::Error;

pub use ics::{clean_name, normalize, parse_color, parse_rank};
pub use translation::TranslationTable;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid name table: {0}")]
    Translations(String),

    #[error("Feed contains no events")]
    Empty,
}
