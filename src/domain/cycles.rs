//! Lectionary cycles and the start of Advent
//!
//! The Sunday cycle (A/B/C) turns over on the first Sunday of Advent;
//! the weekday cycle (1/2) follows the parity of the civil year.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::event::{LiturgicalEvent, SundayCycle, WeekdayCycle};
use super::rank::dominant;

/// First Sunday of Advent falling in the given civil year
///
/// This is the Sunday on or before December 3, which is the same day as
/// the Sunday strictly before Christmas minus three weeks.
pub fn first_sunday_of_advent(year: i32) -> Option<NaiveDate> {
    let dec3 = NaiveDate::from_ymd_opt(year, 12, 3)?;
    let back = dec3.weekday().num_days_from_sunday();
    Some(dec3 - Duration::days(i64::from(back)))
}

/// Computes the lectionary cycles for an event date
pub fn cycles_for(date: NaiveDate) -> (Option<SundayCycle>, WeekdayCycle) {
    let year = date.year();
    let weekday = if year % 2 != 0 {
        WeekdayCycle::One
    } else {
        WeekdayCycle::Two
    };

    let sunday = first_sunday_of_advent(year).map(|advent| {
        let reference = if date < advent { year - 1 } else { year };
        match reference.rem_euclid(3) {
            0 => SundayCycle::A,
            1 => SundayCycle::B,
            _ => SundayCycle::C,
        }
    });

    (sunday, weekday)
}

/// Cycle labels in effect during one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCycles {
    /// Label of the dominant event on the last day of the month
    pub current: String,
    /// Earlier label and the last day it applies, if the month has a turnover
    pub previous: Option<(NaiveDate, String)>,
}

/// Determines which cycle labels apply in a month
///
/// Returns `None` when the last day of the month has no event with known
/// cycles.
pub fn month_cycles(year: i32, month: u32, events: &[LiturgicalEvent]) -> Option<MonthCycles> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first
        .checked_add_months(chrono::Months::new(1))?
        .pred_opt()?;

    let label_on = |date: NaiveDate| -> Option<String> {
        let daily: Vec<LiturgicalEvent> = events.iter().filter(|e| e.date == date).cloned().collect();
        dominant(&daily).and_then(|e| e.cycle_label())
    };

    let current = label_on(last)?;

    let previous = first
        .iter_days()
        .take_while(|d| *d < last)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .find_map(|date| match label_on(date) {
            Some(label) if label != current => Some(Some((date, label))),
            Some(_) => None,
            // A day without a label ends the search
            None => Some(None),
        })
        .flatten();

    Some(MonthCycles { current, previous })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rank;

    #[test]
    fn dominant_event_decides_the_label() {
        let d = date(2024, 3, 31);
        let events = vec![
            LiturgicalEvent::new("bez cyklu", d).with_rank(Rank::OptionalMemorial),
            labelled("Niedziela Zmartwychwstania Pańskiego", d).with_rank(Rank::Solemnity),
        ];
        let cycles = month_cycles(2024, 3, &events).unwrap();
        assert_eq!(cycles.current, "B, 2");
        // March 30 has no events, so there is no turnover to report
        assert_eq!(cycles.previous, None);
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn advent_dates() {
        assert_eq!(first_sunday_of_advent(2022), Some(date(2022, 11, 27)));
        assert_eq!(first_sunday_of_advent(2023), Some(date(2023, 12, 3)));
        assert_eq!(first_sunday_of_advent(2024), Some(date(2024, 12, 1)));
        assert_eq!(first_sunday_of_advent(2025), Some(date(2025, 11, 30)));
    }

    #[test]
    fn advent_matches_christmas_rule() {
        for year in 1990..2100 {
            let christmas = date(year, 12, 25);
            let back = match christmas.weekday().num_days_from_sunday() {
                0 => 7,
                n => n,
            };
            let sunday_before = christmas - Duration::days(i64::from(back));
            let expected = sunday_before - Duration::weeks(3);
            assert_eq!(first_sunday_of_advent(year), Some(expected), "year {}", year);
        }
    }

    #[test]
    fn sunday_cycle_turns_over_at_advent() {
        // Liturgical year 2024 (Advent 2023) is year B
        assert_eq!(cycles_for(date(2024, 6, 10)).0, Some(SundayCycle::B));
        assert_eq!(cycles_for(date(2023, 12, 2)).0, Some(SundayCycle::A));
        assert_eq!(cycles_for(date(2023, 12, 3)).0, Some(SundayCycle::B));
        assert_eq!(cycles_for(date(2024, 12, 1)).0, Some(SundayCycle::C));
    }

    #[test]
    fn weekday_cycle_follows_year_parity() {
        assert_eq!(cycles_for(date(2025, 3, 1)).1, WeekdayCycle::One);
        assert_eq!(cycles_for(date(2024, 3, 1)).1, WeekdayCycle::Two);
    }

    fn labelled(name: &str, d: NaiveDate) -> LiturgicalEvent {
        let (sunday, weekday) = cycles_for(d);
        LiturgicalEvent::new(name, d).with_cycles(sunday, Some(weekday))
    }

    #[test]
    fn month_without_turnover() {
        let events: Vec<_> = date(2024, 6, 1)
            .iter_days()
            .take(30)
            .map(|d| labelled("dzień", d))
            .collect();

        let cycles = month_cycles(2024, 6, &events).unwrap();
        assert_eq!(cycles.current, "B, 2");
        assert_eq!(cycles.previous, None);
    }

    #[test]
    fn december_turnover() {
        let events: Vec<_> = date(2024, 12, 1)
            .iter_days()
            .take(31)
            .map(|d| labelled("dzień", d))
            .collect();

        // Advent 2024 starts on December 1, so the whole month is year C
        let cycles = month_cycles(2024, 12, &events).unwrap();
        assert_eq!(cycles.current, "C, 2");
        assert_eq!(cycles.previous, None);

        let november: Vec<_> = date(2023, 11, 1)
            .iter_days()
            .take(61)
            .map(|d| labelled("dzień", d))
            .collect();
        let cycles = month_cycles(2023, 12, &november).unwrap();
        assert_eq!(cycles.current, "B, 1");
        assert_eq!(cycles.previous, Some((date(2023, 12, 2), "A, 1".to_string())));
    }

    #[test]
    fn month_without_events() {
        assert_eq!(month_cycles(2024, 2, &[]), None);
    }
}
