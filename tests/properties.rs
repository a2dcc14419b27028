//! Property tests over a wide range of years
//!
//! Anchor events are generated from the Gregorian Easter date, standing
//! in for a complete feed.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use liturgical_calendar::domain::{
    augment, build_year_map, dominant, locate_boundaries, LiturgicalEvent, LiturgicalSeason, Rank,
};
use proptest::prelude::*;

/// Gregorian Easter Sunday (anonymous algorithm)
fn easter(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}

fn anchors(year: i32) -> Vec<LiturgicalEvent> {
    let easter = easter(year);
    let epiphany = NaiveDate::from_ymd_opt(year, 1, 6).unwrap();
    let baptism = epiphany
        .iter_days()
        .skip(1)
        .find(|d| d.weekday() == Weekday::Sun)
        .unwrap();

    vec![
        LiturgicalEvent::new("Niedziela Chrztu Pańskiego", baptism).with_rank(Rank::Feast),
        LiturgicalEvent::new("Środa Popielcowa", easter - Duration::days(46)),
        LiturgicalEvent::new("Wielki Czwartek", easter - Duration::days(3)).with_rank(Rank::Solemnity),
        LiturgicalEvent::new("Niedziela Zmartwychwstania Pańskiego", easter).with_rank(Rank::Solemnity),
        LiturgicalEvent::new("Uroczystość Zesłania Ducha Świętego", easter + Duration::days(49))
            .with_rank(Rank::Solemnity),
    ]
}

fn memorial(year: i32, ordinal: u32, name: &str, rank: Rank) -> LiturgicalEvent {
    let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
    LiturgicalEvent::new(name, date).with_rank(rank)
}

proptest! {
    /// The seven boundary dates are strictly chronological
    #[test]
    fn boundaries_are_ordered(year in 1900i32..2200) {
        let boundaries = locate_boundaries(year, &anchors(year)).unwrap();
        let dates = boundaries.in_order();

        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]), "{:?}", dates);
        prop_assert_eq!(dates[0].year(), year - 1);
        prop_assert_eq!(dates[1].year(), year - 1);
        prop_assert!(dates[2..].iter().all(|d| d.year() == year));
    }

    /// Week 0 exactly in the Triduum; every other day is 1-based
    #[test]
    fn week_zero_iff_triduum(year in 1900i32..2200) {
        let map = build_year_map(year, &anchors(year));
        let days_in_year = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() { 366 } else { 365 };
        prop_assert_eq!(map.len(), days_in_year);

        for ctx in map.iter() {
            prop_assert_eq!(ctx.week == 0, ctx.season == LiturgicalSeason::Triduum, "{:?}", ctx);
        }
    }

    /// Seasons follow each other in liturgical order through the year
    #[test]
    fn seasons_in_order(year in 1900i32..2200) {
        let map = build_year_map(year, &anchors(year));

        let mut sequence: Vec<LiturgicalSeason> = Vec::new();
        for ctx in map.iter() {
            if sequence.last() != Some(&ctx.season) {
                sequence.push(ctx.season);
            }
        }

        prop_assert_eq!(
            sequence,
            vec![
                LiturgicalSeason::ChristmasTime,
                LiturgicalSeason::OrdinaryTimePart1,
                LiturgicalSeason::Lent,
                LiturgicalSeason::Triduum,
                LiturgicalSeason::EasterTime,
                LiturgicalSeason::OrdinaryTimePart2,
                LiturgicalSeason::Advent,
            ]
        );
    }

    /// No season runs past its fixed length; Advent reaches a fifth week
    /// only through the last days of December
    #[test]
    fn season_week_bounds(year in 1900i32..2200) {
        let map = build_year_map(year, &anchors(year));
        for ctx in map.iter() {
            match ctx.season {
                LiturgicalSeason::Lent => prop_assert!(ctx.week <= 7, "{:?}", ctx),
                LiturgicalSeason::EasterTime => prop_assert!(ctx.week <= 8, "{:?}", ctx),
                LiturgicalSeason::Advent => {
                    prop_assert!(ctx.week <= 5, "{:?}", ctx);
                    if ctx.week == 5 {
                        prop_assert!(ctx.date.month() == 12 && ctx.date.day() >= 25, "{:?}", ctx);
                    }
                }
                LiturgicalSeason::ChristmasTime => prop_assert!(ctx.week <= 2, "{:?}", ctx),
                _ => {}
            }
        }
    }

    /// Augmenting twice adds nothing
    #[test]
    fn augment_is_idempotent(year in 1950i32..2100, ordinals in prop::collection::vec(1u32..365, 0..20)) {
        let mut events = anchors(year);
        for (i, ordinal) in ordinals.iter().enumerate() {
            events.push(memorial(year, *ordinal, &format!("Wspomnienie {}", i), Rank::OptionalMemorial));
        }

        let once = augment(&events);
        let twice = augment(&once);
        prop_assert_eq!(once, twice);
    }

    /// A day holding only memorials gets exactly one weekday
    #[test]
    fn one_weekday_per_memorial_day(year in 1950i32..2100, count in 1usize..5) {
        // July 15 always falls in Ordinary Time
        let ordinal = NaiveDate::from_ymd_opt(year, 7, 15).unwrap().ordinal();
        let mut events = anchors(year);
        for i in 0..count {
            let rank = if i % 2 == 0 { Rank::OptionalMemorial } else { Rank::ObligatoryMemorial };
            events.push(memorial(year, ordinal, &format!("Wspomnienie {}", i), rank));
        }

        let augmented = augment(&events);
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let weekdays = augmented
            .iter()
            .filter(|e| e.date == date && e.rank == Rank::Weekday)
            .count();
        prop_assert_eq!(weekdays, 1);

        let daily: Vec<_> = augmented.iter().filter(|e| e.date == date).cloned().collect();
        prop_assert!(dominant(&daily).unwrap().rank.is_memorial());
    }

    /// A Solemnity wins over memorials wherever it sits in the list
    #[test]
    fn solemnity_dominates_memorials(position in 0usize..3) {
        let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        let mut events = vec![
            LiturgicalEvent::new("Wspomnienie 1", date).with_rank(Rank::OptionalMemorial),
            LiturgicalEvent::new("Wspomnienie 2", date).with_rank(Rank::OptionalMemorial),
        ];
        events.insert(
            position,
            LiturgicalEvent::new("Wniebowzięcie Najświętszej Maryi Panny", date).with_rank(Rank::Solemnity),
        );

        let winner = dominant(&events).unwrap();
        prop_assert_eq!(winner.rank, Rank::Solemnity);
        prop_assert_eq!(winner.name.as_str(), "Wniebowzięcie Najświętszej Maryi Panny");
    }
}

#[test]
fn concrete_2024_scenarios() {
    let events = anchors(2024);
    let map = build_year_map(2024, &events);

    let june_10 = map.get(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()).unwrap();
    assert_eq!(june_10.season, LiturgicalSeason::OrdinaryTimePart2);
    assert_eq!(june_10.week, 13);

    let april_1 = map.get(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()).unwrap();
    assert_eq!(april_1.season, LiturgicalSeason::EasterTime);
    assert_eq!(april_1.week, 1);

    let december_27 = map.get(NaiveDate::from_ymd_opt(2024, 12, 27).unwrap()).unwrap();
    assert_eq!(december_27.season, LiturgicalSeason::Advent);
}
