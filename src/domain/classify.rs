//! Season and week classification of a single date
//!
//! Ranges are checked in a fixed order and the first match wins:
//!
//! | Range | Season | Weeks start on |
//! |-------|--------|----------------|
//! | after Pentecost, before the next Advent | Ordinary Time II | see [`OrdinaryTimeWeeks`] |
//! | Easter ..= Pentecost | Easter Time | Sunday |
//! | Holy Thursday .. Easter | Triduum | (week 0) |
//! | Ash Wednesday .. Holy Thursday | Lent | Wednesday |
//! | after Baptism, before Ash Wednesday | Ordinary Time I | Monday |
//! | Christmas ..= Baptism | Christmas Time | (1 or 2) |
//! | anything else | Advent | Sunday |
//!
//! The first Sunday of Advent bounding Ordinary Time II and starting the
//! Advent count is computed for the date's own civil year (the previous one
//! for January dates), so it always falls on a Sunday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::trace;

use super::boundary::BoundaryDates;
use super::cycles::first_sunday_of_advent;
use super::season::{LiturgicalDayContext, LiturgicalSeason};
use super::weeks::{ordinary_time_week, week_of_season, OrdinaryTimeWeeks};

/// Sunday closing the Monday-started week that contains `date`
fn sunday_of_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(i64::from(6 - date.weekday().num_days_from_monday()))
}

fn christmas_week(date: NaiveDate, christmas: NaiveDate) -> u32 {
    if date < sunday_of_week(christmas) {
        1
    } else {
        2
    }
}

/// Classifies `date` against the boundaries of its liturgical year
pub fn classify(
    date: NaiveDate,
    boundaries: &BoundaryDates,
    numbering: OrdinaryTimeWeeks,
) -> LiturgicalDayContext {
    let BoundaryDates {
        first_sunday_of_advent: _,
        christmas,
        baptism_of_the_lord,
        ash_wednesday,
        holy_thursday,
        easter_sunday,
        pentecost,
    } = *boundaries;

    let year = date.year();
    // Falls back to the far future only at the edge of chrono's range
    let next_advent = first_sunday_of_advent(year).unwrap_or(NaiveDate::MAX);

    let (season, week) = if date > pentecost && date < next_advent {
        (
            LiturgicalSeason::OrdinaryTimePart2,
            ordinary_time_week(date, pentecost, next_advent, numbering),
        )
    } else if date >= easter_sunday && date <= pentecost {
        (
            LiturgicalSeason::EasterTime,
            week_of_season(date, easter_sunday, Weekday::Sun),
        )
    } else if date >= holy_thursday && date < easter_sunday {
        (LiturgicalSeason::Triduum, 0)
    } else if date >= ash_wednesday && date < holy_thursday {
        (
            LiturgicalSeason::Lent,
            week_of_season(date, ash_wednesday, Weekday::Wed),
        )
    } else if date > baptism_of_the_lord && date < ash_wednesday {
        (
            LiturgicalSeason::OrdinaryTimePart1,
            week_of_season(date, baptism_of_the_lord + Duration::days(1), Weekday::Mon),
        )
    } else if date >= christmas && date <= baptism_of_the_lord {
        (LiturgicalSeason::ChristmasTime, christmas_week(date, christmas))
    } else {
        let advent_year = if date.month() == 12 { year } else { year - 1 };
        let start = first_sunday_of_advent(advent_year).unwrap_or(boundaries.first_sunday_of_advent);
        (LiturgicalSeason::Advent, week_of_season(date, start, Weekday::Sun))
    };

    trace!(%date, %season, week, "classified date");
    LiturgicalDayContext::new(date, season, week)
}
