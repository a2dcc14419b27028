//! Boundary dates of a liturgical year
//!
//! Advent and Christmas are computed; the five movable anchors are looked
//! up by name in the event feed. No Easter computus is performed here, so
//! a year is only resolvable when the feed carries all five anchors.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use super::cycles::first_sunday_of_advent;
use super::event::LiturgicalEvent;

/// A movable feast that must be found in the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    BaptismOfTheLord,
    AshWednesday,
    HolyThursday,
    EasterSunday,
    Pentecost,
}

impl Anchor {
    /// Canonical name fragment searched for (case-insensitive)
    pub fn needle(&self) -> &'static str {
        match self {
            Anchor::BaptismOfTheLord => "Niedziela Chrztu Pańskiego",
            Anchor::AshWednesday => "Środa Popielcowa",
            Anchor::HolyThursday => "Wielki Czwartek",
            Anchor::EasterSunday => "Niedziela Zmartwychwstania Pańskiego",
            Anchor::Pentecost => "Zesłania Ducha Świętego",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Anchor::BaptismOfTheLord => "Baptism of the Lord",
            Anchor::AshWednesday => "Ash Wednesday",
            Anchor::HolyThursday => "Holy Thursday",
            Anchor::EasterSunday => "Easter Sunday",
            Anchor::Pentecost => "Pentecost",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BoundaryError {
    #[error("No {anchor} event ('{}') found for {year}", anchor.needle())]
    MissingAnchor { anchor: Anchor, year: i32 },

    #[error("Year {0} is outside the supported date range")]
    YearOutOfRange(i32),
}

/// The seven dates delimiting the seasons of one liturgical year
///
/// Advent and Christmas belong to the previous civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundaryDates {
    pub first_sunday_of_advent: NaiveDate,
    pub christmas: NaiveDate,
    pub baptism_of_the_lord: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub holy_thursday: NaiveDate,
    pub easter_sunday: NaiveDate,
    pub pentecost: NaiveDate,
}

impl BoundaryDates {
    /// The dates in chronological order
    pub fn in_order(&self) -> [NaiveDate; 7] {
        [
            self.first_sunday_of_advent,
            self.christmas,
            self.baptism_of_the_lord,
            self.ash_wednesday,
            self.holy_thursday,
            self.easter_sunday,
            self.pentecost,
        ]
    }
}

/// Finds the date of the first event in `year` whose name contains the anchor's needle
fn find_anchor(anchor: Anchor, year: i32, events: &[LiturgicalEvent]) -> Result<NaiveDate, BoundaryError> {
    let needle = anchor.needle().to_lowercase();

    match events
        .iter()
        .find(|e| e.date.year() == year && e.name.to_lowercase().contains(&needle))
    {
        Some(event) => {
            debug!(%anchor, year, date = %event.date, "found boundary anchor");
            Ok(event.date)
        }
        None => {
            warn!(%anchor, year, "boundary anchor missing from event list");
            Err(BoundaryError::MissingAnchor { anchor, year })
        }
    }
}

/// Locates the boundary dates for the liturgical year ending in civil year `year`
pub fn locate(year: i32, events: &[LiturgicalEvent]) -> Result<BoundaryDates, BoundaryError> {
    let previous = year - 1;
    let first_sunday_of_advent =
        first_sunday_of_advent(previous).ok_or(BoundaryError::YearOutOfRange(year))?;
    let christmas =
        NaiveDate::from_ymd_opt(previous, 12, 25).ok_or(BoundaryError::YearOutOfRange(year))?;

    Ok(BoundaryDates {
        first_sunday_of_advent,
        christmas,
        baptism_of_the_lord: find_anchor(Anchor::BaptismOfTheLord, year, events)?,
        ash_wednesday: find_anchor(Anchor::AshWednesday, year, events)?,
        holy_thursday: find_anchor(Anchor::HolyThursday, year, events)?,
        easter_sunday: find_anchor(Anchor::EasterSunday, year, events)?,
        pentecost: find_anchor(Anchor::Pentecost, year, events)?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Anchor events for 2024 as they appear after name translation
    pub(crate) fn anchors_2024() -> Vec<LiturgicalEvent> {
        vec![
            LiturgicalEvent::new("Niedziela Chrztu Pańskiego", date(2024, 1, 7)),
            LiturgicalEvent::new("Środa Popielcowa", date(2024, 2, 14)),
            LiturgicalEvent::new("Wielki Czwartek", date(2024, 3, 28)),
            LiturgicalEvent::new("Niedziela Zmartwychwstania Pańskiego", date(2024, 3, 31)),
            LiturgicalEvent::new("Uroczystość Zesłania Ducha Świętego", date(2024, 5, 19)),
        ]
    }

    #[test]
    fn locate_2024() {
        let boundaries = locate(2024, &anchors_2024()).unwrap();

        assert_eq!(boundaries.first_sunday_of_advent, date(2023, 12, 3));
        assert_eq!(boundaries.christmas, date(2023, 12, 25));
        assert_eq!(boundaries.baptism_of_the_lord, date(2024, 1, 7));
        assert_eq!(boundaries.ash_wednesday, date(2024, 2, 14));
        assert_eq!(boundaries.holy_thursday, date(2024, 3, 28));
        assert_eq!(boundaries.easter_sunday, date(2024, 3, 31));
        assert_eq!(boundaries.pentecost, date(2024, 5, 19));
    }

    #[test]
    fn boundaries_are_chronological() {
        let boundaries = locate(2024, &anchors_2024()).unwrap();
        let dates = boundaries.in_order();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(dates[0].year(), 2023);
        assert_eq!(dates[1].year(), 2023);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut events = anchors_2024();
        events[1] = LiturgicalEvent::new("ŚRODA POPIELCOWA", date(2024, 2, 14));

        let boundaries = locate(2024, &events).unwrap();
        assert_eq!(boundaries.ash_wednesday, date(2024, 2, 14));
    }

    #[test]
    fn lookup_ignores_other_years() {
        let mut events = vec![LiturgicalEvent::new("Środa Popielcowa", date(2023, 2, 22))];
        events.extend(anchors_2024());

        let boundaries = locate(2024, &events).unwrap();
        assert_eq!(boundaries.ash_wednesday, date(2024, 2, 14));
    }

    #[test]
    fn missing_anchor_fails_whole_year() {
        let events: Vec<_> = anchors_2024()
            .into_iter()
            .filter(|e| !e.name.contains("Zesłania"))
            .collect();

        assert_eq!(
            locate(2024, &events),
            Err(BoundaryError::MissingAnchor {
                anchor: Anchor::Pentecost,
                year: 2024
            })
        );
    }

    #[test]
    fn error_message_names_the_anchor() {
        let err = BoundaryError::MissingAnchor {
            anchor: Anchor::EasterSunday,
            year: 2030,
        };
        assert_eq!(
            err.to_string(),
            "No Easter Sunday event ('Niedziela Zmartwychwstania Pańskiego') found for 2030"
        );
    }
}
