//! Liturgical calendar of the Roman rite
//!
//! Imports a feast feed in ICS format, locates the boundary dates of each
//! liturgical year, classifies every day into its season and week, and
//! fills the gaps between feasts with the proper weekday names.

pub mod cli;
pub mod domain;
pub mod feed;
pub mod logging;
pub mod storage;

pub use domain::{
    augment, build_year_map, dominant, LiturgicalDayContext, LiturgicalEvent, LiturgicalSeason,
    LiturgicalYearMap, Rank,
};
pub use feed::{normalize, TranslationTable};
