//! Week numbering within a season
//!
//! Season weeks are counted on a calendar whose weeks begin on a chosen
//! weekday, with week 1 being the week that contains January 1.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How weeks of the second part of Ordinary Time are numbered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinaryTimeWeeks {
    /// ISO week of the date minus ISO week of Pentecost, plus 9
    #[default]
    PentecostOffset,
    /// Count back from the 34th week, which ends before Advent
    AdventCountdown,
}

/// Number of the last week of Ordinary Time
pub const LAST_ORDINARY_WEEK: u32 = 34;

/// Offset added to the ISO week difference from Pentecost
pub const PENTECOST_WEEK_OFFSET: u32 = 9;

fn days_from(day: Weekday, week_start: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - week_start.num_days_from_monday()) % 7
}

/// Days between the start of the week containing January 1 and January 1
fn jan1_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    let from_start = days_from(date.weekday(), week_start);
    (from_start + 7 - date.ordinal0() % 7) % 7
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Week of the year for weeks starting on `week_start`
pub fn week_of_year(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.ordinal0() + jan1_offset(date, week_start)) / 7 + 1
}

/// Number of (possibly partial) weeks in the year of `date`
pub fn weeks_in_year(date: NaiveDate, week_start: Weekday) -> u32 {
    let last_ordinal0 = if is_leap_year(date.year()) { 365 } else { 364 };
    (last_ordinal0 + jan1_offset(date, week_start)) / 7 + 1
}

/// 1-based week of a season that began on `start`
///
/// If the current week number is smaller than the start's, the count
/// wrapped into a new year and the start year's week total is added.
pub fn week_of_season(current: NaiveDate, start: NaiveDate, week_start: Weekday) -> u32 {
    let start_week = week_of_year(start, week_start);
    let current_week = week_of_year(current, week_start);

    if current_week < start_week {
        weeks_in_year(start, week_start) - start_week + current_week + 1
    } else {
        current_week - start_week + 1
    }
}

/// Week of the second part of Ordinary Time
pub fn ordinary_time_week(
    date: NaiveDate,
    pentecost: NaiveDate,
    next_advent: NaiveDate,
    numbering: OrdinaryTimeWeeks,
) -> u32 {
    match numbering {
        OrdinaryTimeWeeks::PentecostOffset => {
            let current = date.iso_week().week();
            let pentecost_week = pentecost.iso_week().week();
            (current + PENTECOST_WEEK_OFFSET).saturating_sub(pentecost_week)
        }
        OrdinaryTimeWeeks::AdventCountdown => {
            let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
            let weeks_left = (next_advent - sunday).num_days().max(0) / 7;
            let weeks_left = u32::try_from(weeks_left).unwrap_or(LAST_ORDINARY_WEEK);
            (LAST_ORDINARY_WEEK + 1).saturating_sub(weeks_left)
        }
    }
}
