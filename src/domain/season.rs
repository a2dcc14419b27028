//! Liturgical seasons and the per-day context

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven periods of the liturgical year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalSeason {
    Advent,
    ChristmasTime,
    OrdinaryTimePart1,
    Lent,
    Triduum,
    EasterTime,
    OrdinaryTimePart2,
}

impl LiturgicalSeason {
    /// All seasons in liturgical-year order
    pub const ALL: [LiturgicalSeason; 7] = [
        LiturgicalSeason::Advent,
        LiturgicalSeason::ChristmasTime,
        LiturgicalSeason::OrdinaryTimePart1,
        LiturgicalSeason::Lent,
        LiturgicalSeason::Triduum,
        LiturgicalSeason::EasterTime,
        LiturgicalSeason::OrdinaryTimePart2,
    ];

    /// Returns true if the season numbers its weeks
    pub fn has_weeks(&self) -> bool {
        !matches!(self, LiturgicalSeason::Triduum)
    }

    /// Genitive period name used in weekday names, for seasons that have one
    pub fn period_name(&self) -> Option<&'static str> {
        match self {
            LiturgicalSeason::Advent => Some("Adwentu"),
            LiturgicalSeason::Lent => Some("Wielkiego Postu"),
            LiturgicalSeason::EasterTime => Some("Okresu Wielkanocnego"),
            LiturgicalSeason::OrdinaryTimePart1 | LiturgicalSeason::OrdinaryTimePart2 => {
                Some("Okresu Zwykłego")
            }
            LiturgicalSeason::ChristmasTime | LiturgicalSeason::Triduum => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "advent",
            LiturgicalSeason::ChristmasTime => "christmas_time",
            LiturgicalSeason::OrdinaryTimePart1 => "ordinary_time_part1",
            LiturgicalSeason::Lent => "lent",
            LiturgicalSeason::Triduum => "triduum",
            LiturgicalSeason::EasterTime => "easter_time",
            LiturgicalSeason::OrdinaryTimePart2 => "ordinary_time_part2",
        }
    }
}

impl fmt::Display for LiturgicalSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Season and week-of-season for one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiturgicalDayContext {
    pub date: NaiveDate,
    pub season: LiturgicalSeason,
    /// Season-relative and 1-based; 0 only in the Triduum
    pub week: u32,
}

impl LiturgicalDayContext {
    pub fn new(date: NaiveDate, season: LiturgicalSeason, week: u32) -> Self {
        Self { date, season, week }
    }
}
