//! Date-to-context map for one civil year

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::boundary::{locate, BoundaryDates, BoundaryError};
use super::classify::classify;
use super::event::LiturgicalEvent;
use super::season::LiturgicalDayContext;
use super::weeks::OrdinaryTimeWeeks;

/// Tunable parts of the calendar computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub ordinary_time_weeks: OrdinaryTimeWeeks,
}

/// Every day of a civil year with its liturgical context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LiturgicalYearMap {
    pub year: i32,
    pub days: BTreeMap<NaiveDate, LiturgicalDayContext>,
}

impl LiturgicalYearMap {
    fn empty(year: i32) -> Self {
        Self {
            year,
            days: BTreeMap::new(),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&LiturgicalDayContext> {
        self.days.get(&date)
    }

    /// Contexts in date order
    pub fn iter(&self) -> impl Iterator<Item = &LiturgicalDayContext> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Classifies every day of `year` against known boundaries
pub fn map_year(year: i32, boundaries: &BoundaryDates, options: &CalendarOptions) -> LiturgicalYearMap {
    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return LiturgicalYearMap::empty(year);
    };

    let days = first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|d| (d, classify(d, boundaries, options.ordinary_time_weeks)))
        .collect();

    LiturgicalYearMap { year, days }
}

/// Builds the map, reporting why a year cannot be resolved
pub fn try_build_year_map(
    year: i32,
    events: &[LiturgicalEvent],
    options: &CalendarOptions,
) -> Result<LiturgicalYearMap, BoundaryError> {
    let boundaries = locate(year, events)?;
    let map = map_year(year, &boundaries, options);
    debug!(year, days = map.len(), "built year map");
    Ok(map)
}

/// Builds the map with explicit options; empty if the year is unresolvable
pub fn build_year_map_with(
    year: i32,
    events: &[LiturgicalEvent],
    options: &CalendarOptions,
) -> LiturgicalYearMap {
    try_build_year_map(year, events, options).unwrap_or_else(|err| {
        warn!(year, error = %err, "no liturgical data for year");
        LiturgicalYearMap::empty(year)
    })
}

/// Builds the map with default options; empty if the year is unresolvable
pub fn build_year_map(year: i32, events: &[LiturgicalEvent]) -> LiturgicalYearMap {
    build_year_map_with(year, events, &CalendarOptions::default())
}
