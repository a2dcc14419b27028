//! Synthesis of ordinary weekday events
//!
//! Days of Advent, Lent, Easter Time and Ordinary Time that carry no
//! event, or only memorials, receive a generated weekday entry such as
//! `3 Środa Wielkiego Postu`. The result is de-duplicated on
//! `(name, date)`, so augmenting an augmented list changes nothing.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, info};

use super::event::{LiturgicalColor, LiturgicalEvent, Rank};
use super::season::{LiturgicalDayContext, LiturgicalSeason};
use super::year_map::{build_year_map_with, CalendarOptions};

/// Full Polish weekday name, capitalized
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Poniedziałek",
        Weekday::Tue => "Wtorek",
        Weekday::Wed => "Środa",
        Weekday::Thu => "Czwartek",
        Weekday::Fri => "Piątek",
        Weekday::Sat => "Sobota",
        Weekday::Sun => "Niedziela",
    }
}

fn season_color(season: LiturgicalSeason) -> LiturgicalColor {
    match season {
        LiturgicalSeason::Advent | LiturgicalSeason::Lent => LiturgicalColor::Purple,
        LiturgicalSeason::EasterTime => LiturgicalColor::White,
        _ => LiturgicalColor::Green,
    }
}

/// Builds the weekday event for a day, or `None` for seasons without weekday names
pub fn weekday_event(context: &LiturgicalDayContext, cycles_from: Option<&LiturgicalEvent>) -> Option<LiturgicalEvent> {
    let period = context.season.period_name()?;
    let name = format!(
        "{} {} {}",
        context.week,
        weekday_name(context.date.weekday()),
        period
    );

    let (sunday, weekday) = cycles_from
        .map(|e| (e.sunday_cycle, e.weekday_cycle))
        .unwrap_or((None, None));

    Some(
        LiturgicalEvent::new(name, context.date)
            .with_rank(Rank::Weekday)
            .with_color(season_color(context.season))
            .with_cycles(sunday, weekday),
    )
}

/// Returns true if a weekday should be added to a day with these events
fn needs_weekday(daily: &[&LiturgicalEvent]) -> bool {
    daily.iter().all(|e| e.rank.is_memorial())
}

/// Augments with default options
pub fn augment(events: &[LiturgicalEvent]) -> Vec<LiturgicalEvent> {
    augment_with(events, &CalendarOptions::default())
}

/// Adds synthesized weekdays for every civil year present in `events`
///
/// Years whose boundaries cannot be located contribute nothing.
pub fn augment_with(events: &[LiturgicalEvent], options: &CalendarOptions) -> Vec<LiturgicalEvent> {
    let Some(first) = events.first() else {
        return Vec::new();
    };

    let years: BTreeSet<i32> = events.iter().map(|e| e.date.year()).collect();

    let mut by_date: HashMap<NaiveDate, Vec<&LiturgicalEvent>> = HashMap::new();
    for event in events {
        by_date.entry(event.date).or_default().push(event);
    }

    let synthesized: Vec<LiturgicalEvent> = years
        .iter()
        .flat_map(|&year| {
            let map = build_year_map_with(year, events, options);
            debug!(year, days = map.len(), "augmenting year");
            map.days.into_values()
        })
        .filter_map(|context| {
            let daily = by_date.get(&context.date).map(Vec::as_slice).unwrap_or(&[]);
            if !needs_weekday(daily) {
                return None;
            }
            let base = daily.first().copied().unwrap_or(first);
            weekday_event(&context, Some(base))
        })
        .collect();

    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();
    let augmented: Vec<LiturgicalEvent> = events
        .iter()
        .cloned()
        .chain(synthesized)
        .filter(|e| seen.insert(e.key()))
        .collect();

    info!(
        input = events.len(),
        output = augmented.len(),
        "augmentation finished"
    );
    augmented
}
