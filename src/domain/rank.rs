//! Rank resolution between events sharing a date

use std::cmp::Ordering;

use super::event::LiturgicalEvent;

/// Returns the highest-ranked event
///
/// Ties go to the event encountered first. Empty input yields `None`.
pub fn dominant(events: &[LiturgicalEvent]) -> Option<&LiturgicalEvent> {
    events.iter().min_by_key(|e| e.rank.precedence())
}

/// Ordering used when listing a day's events
///
/// Rank first, then names carrying a week number before plain names,
/// then alphabetical.
pub fn display_order(a: &LiturgicalEvent, b: &LiturgicalEvent) -> Ordering {
    let numbered = |e: &LiturgicalEvent| !e.name.chars().any(|c| c.is_ascii_digit());

    a.rank
        .precedence()
        .cmp(&b.rank.precedence())
        .then_with(|| numbered(a).cmp(&numbered(b)))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sorts events in place using [`display_order`]
pub fn sort_for_display(events: &mut [LiturgicalEvent]) {
    events.sort_by(display_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rank;
    use chrono::NaiveDate;

    fn event(name: &str, rank: Rank) -> LiturgicalEvent {
        let date = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        LiturgicalEvent::new(name, date).with_rank(rank)
    }

    #[test]
    fn empty_input_has_no_dominant() {
        assert_eq!(dominant(&[]), None);
    }

    #[test]
    fn solemnity_beats_optional_memorials() {
        let events = vec![
            event("Św. Marcina", Rank::OptionalMemorial),
            event("Wszystkich Świętych", Rank::Solemnity),
            event("Bł. Rafała", Rank::OptionalMemorial),
        ];

        assert_eq!(dominant(&events).unwrap().name, "Wszystkich Świętych");
    }

    #[test]
    fn memorial_beats_unranked_weekday() {
        let events = vec![
            event("30 Piątek Okresu Zwykłego", Rank::Weekday),
            event("Św. Karola Boromeusza", Rank::ObligatoryMemorial),
        ];

        assert_eq!(dominant(&events).unwrap().name, "Św. Karola Boromeusza");
    }

    #[test]
    fn ties_go_to_first_encountered() {
        let events = vec![
            event("Pierwsze", Rank::Feast),
            event("Drugie", Rank::Feast),
        ];

        assert_eq!(dominant(&events).unwrap().name, "Pierwsze");
    }

    #[test]
    fn display_order_puts_numbered_names_first() {
        let mut events = vec![
            event("Św. Jana", Rank::OptionalMemorial),
            event("Zwykły dzień", Rank::Weekday),
            event("3 Środa Okresu Zwykłego", Rank::Weekday),
            event("Uroczystość", Rank::Solemnity),
        ];

        sort_for_display(&mut events);

        let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Uroczystość",
                "Św. Jana",
                "3 Środa Okresu Zwykłego",
                "Zwykły dzień"
            ]
        );
    }
}
