//! Liturgical event model
//!
//! An event is one named celebration on one date. Events come from the
//! feed normalizer or are synthesized by the weekday augmenter, and are
//! identified by their `(name, date)` pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Textual date format used at the persistence boundary
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Error, PartialEq)]
pub enum EventError {
    #[error("Invalid date '{0}': expected dd-mm-yyyy")]
    InvalidDate(String),

    #[error("Unknown rank: '{0}'")]
    UnknownRank(String),
}

/// Parses a `dd-mm-yyyy` date
pub fn parse_date(s: &str) -> Result<NaiveDate, EventError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| EventError::InvalidDate(s.to_string()))
}

/// Formats a date as `dd-mm-yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `dd-mm-yyyy` dates
mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_date(&s).map_err(serde::de::Error::custom)
    }
}

/// Precedence class of a celebration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Solemnity,
    Feast,
    ObligatoryMemorial,
    OptionalMemorial,
    /// Unranked day, including synthesized weekdays
    #[default]
    #[serde(rename = "")]
    Weekday,
}

impl Rank {
    /// Position in the rank hierarchy; lower wins
    pub fn precedence(&self) -> u8 {
        match self {
            Rank::Solemnity => 0,
            Rank::Feast => 1,
            Rank::ObligatoryMemorial => 2,
            Rank::OptionalMemorial => 3,
            Rank::Weekday => 4,
        }
    }

    /// Returns true for obligatory and optional memorials
    pub fn is_memorial(&self) -> bool {
        matches!(self, Rank::ObligatoryMemorial | Rank::OptionalMemorial)
    }

    /// Maps the bracketed one-letter feed code to a rank
    pub fn from_feed_code(code: &str) -> Self {
        match code {
            "U" => Rank::Solemnity,
            "Ś" => Rank::Feast,
            "W" => Rank::ObligatoryMemorial,
            "w" | "w*" => Rank::OptionalMemorial,
            _ => Rank::Weekday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Solemnity => "solemnity",
            Rank::Feast => "feast",
            Rank::ObligatoryMemorial => "obligatory_memorial",
            Rank::OptionalMemorial => "optional_memorial",
            Rank::Weekday => "",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "solemnity" => Ok(Rank::Solemnity),
            "feast" => Ok(Rank::Feast),
            "obligatory_memorial" => Ok(Rank::ObligatoryMemorial),
            "optional_memorial" => Ok(Rank::OptionalMemorial),
            "" | "weekday" => Ok(Rank::Weekday),
            other => Err(EventError::UnknownRank(other.to_string())),
        }
    }
}

/// Liturgical color of a celebration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalColor {
    White,
    Red,
    Green,
    Purple,
    Rose,
    #[default]
    Unknown,
}

impl LiturgicalColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiturgicalColor::White => "white",
            LiturgicalColor::Red => "red",
            LiturgicalColor::Green => "green",
            LiturgicalColor::Purple => "purple",
            LiturgicalColor::Rose => "rose",
            LiturgicalColor::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Three-year Sunday lectionary cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SundayCycle {
    A,
    B,
    C,
}

impl fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SundayCycle::A => "A",
            SundayCycle::B => "B",
            SundayCycle::C => "C",
        };
        f.write_str(letter)
    }
}

/// Two-year weekday lectionary cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayCycle {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdayCycle::One => f.write_str("1"),
            WeekdayCycle::Two => f.write_str("2"),
        }
    }
}

/// One named celebration on one date
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiturgicalEvent {
    /// Canonical display name
    pub name: String,

    #[serde(with = "date_format")]
    pub date: NaiveDate,

    /// `None` when the cycle is unknown
    pub sunday_cycle: Option<SundayCycle>,

    /// `None` when the cycle is unknown
    pub weekday_cycle: Option<WeekdayCycle>,

    #[serde(default)]
    pub rank: Rank,

    #[serde(default)]
    pub color: LiturgicalColor,
}

impl LiturgicalEvent {
    /// Creates an unranked event with unknown cycles and color
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            sunday_cycle: None,
            weekday_cycle: None,
            rank: Rank::Weekday,
            color: LiturgicalColor::Unknown,
        }
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_color(mut self, color: LiturgicalColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_cycles(
        mut self,
        sunday_cycle: Option<SundayCycle>,
        weekday_cycle: Option<WeekdayCycle>,
    ) -> Self {
        self.sunday_cycle = sunday_cycle;
        self.weekday_cycle = weekday_cycle;
        self
    }

    /// The `(name, date)` identity used for de-duplication
    pub fn key(&self) -> (String, NaiveDate) {
        (self.name.clone(), self.date)
    }

    /// Cycle label such as `B, 2`, or `None` if either cycle is unknown
    pub fn cycle_label(&self) -> Option<String> {
        match (self.sunday_cycle, self.weekday_cycle) {
            (Some(sunday), Some(weekday)) => Some(format!("{}, {}", sunday, weekday)),
            _ => None,
        }
    }
}
