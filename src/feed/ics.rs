//! ICS feed normalizer
//!
//! Only `VEVENT` blocks are read, and only two of their properties:
//! `DTSTART` (a `YYYYMMDD` date) and `SUMMARY`. The summary carries the
//! rank as a bracketed code and the color as an emoji, for example
//! `[U]⚪ Narodzenie Pańskie`. Malformed blocks are skipped.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{cycles_for, LiturgicalColor, LiturgicalEvent, Rank};

use super::translation::TranslationTable;

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// Summary keywords that mark the two rose Sundays
const ROSE_KEYWORDS: &[&str] = &[
    "gaudete",
    "iii niedziela adwentu",
    "3 niedziela adwentu",
    "laetare",
    "iv niedziela wielkiego postu",
    "4 niedziela wielkiego postu",
];

const COLOR_MARKERS: &[(char, LiturgicalColor)] = &[
    ('⚪', LiturgicalColor::White),
    ('🔴', LiturgicalColor::Red),
    ('🟢', LiturgicalColor::Green),
    ('🟣', LiturgicalColor::Purple),
    ('💗', LiturgicalColor::Rose),
    ('🩷', LiturgicalColor::Rose),
];

/// Variation selector that often trails color emoji
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Properties collected from one `VEVENT` block
#[derive(Debug, Default)]
struct RawEvent {
    line: usize,
    dtstart: Option<String>,
    summary: Option<String>,
}

/// Splits a content line into property name (without parameters) and value
fn property(line: &str) -> Option<(&str, &str)> {
    let (head, value) = line.split_once(':')?;
    let name = head.split(';').next().unwrap_or(head);
    Some((name, value))
}

/// Joins folded lines; a line starting with a space or tab continues the previous one
fn unfold(feed: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (index, raw) in feed.lines().enumerate() {
        if raw.starts_with([' ', '\t']) {
            if let Some((_, previous)) = lines.last_mut() {
                previous.push_str(raw.trim_start());
                continue;
            }
        }
        lines.push((index + 1, raw.to_string()));
    }

    lines
}

fn collect_blocks(feed: &str) -> Vec<RawEvent> {
    let mut blocks = Vec::new();
    let mut current: Option<RawEvent> = None;

    for (line_no, line) in unfold(feed) {
        if line == BEGIN_EVENT {
            if let Some(open) = current.take() {
                blocks.push(open);
            }
            current = Some(RawEvent {
                line: line_no,
                ..RawEvent::default()
            });
            continue;
        }

        let Some(block) = current.as_mut() else {
            continue;
        };

        if line == END_EVENT {
            if let Some(done) = current.take() {
                blocks.push(done);
            }
            continue;
        }

        match property(&line) {
            Some(("DTSTART", value)) => block.dtstart = Some(value.trim().to_string()),
            Some(("SUMMARY", value)) => block.summary = Some(value.to_string()),
            _ => {}
        }
    }

    // An unterminated trailing block is still read
    if let Some(open) = current {
        blocks.push(open);
    }

    blocks
}

/// Parses an 8-digit `YYYYMMDD` date
fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").ok()
}

/// Rank from the first bracketed code in the summary
pub fn parse_rank(summary: &str) -> Rank {
    summary
        .split_once('[')
        .and_then(|(_, rest)| rest.split_once(']'))
        .map(|(code, _)| Rank::from_feed_code(code))
        .unwrap_or(Rank::Weekday)
}

/// Color from rose keywords, then from emoji markers
pub fn parse_color(summary: &str) -> LiturgicalColor {
    let lower = summary.to_lowercase();
    if ROSE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return LiturgicalColor::Rose;
    }

    COLOR_MARKERS
        .iter()
        .find(|(marker, _)| summary.contains(*marker))
        .map(|(_, color)| *color)
        .unwrap_or(LiturgicalColor::Unknown)
}

/// Removes every `[...]` group along with the whitespace after it
fn strip_brackets(summary: &str) -> String {
    let mut out = String::with_capacity(summary.len());
    let mut rest = summary;

    while let Some(start) = rest.find('[') {
        let Some(len) = rest[start..].find(']') else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = rest[start + len + 1..].trim_start();
    }
    out.push_str(rest);
    out
}

/// Display name before translation
pub fn clean_name(summary: &str) -> String {
    let stripped: String = strip_brackets(summary)
        .chars()
        .filter(|c| {
            !COLOR_MARKERS.iter().any(|(marker, _)| marker == c)
                && !matches!(*c, '?' | '\\' | '/' | VARIATION_SELECTOR)
        })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn build_event(raw: RawEvent, table: &TranslationTable) -> Option<LiturgicalEvent> {
    let Some(dtstart) = raw.dtstart else {
        warn!(line = raw.line, "skipping event without DTSTART");
        return None;
    };
    let Some(summary) = raw.summary else {
        warn!(line = raw.line, "skipping event without SUMMARY");
        return None;
    };
    let Some(date) = parse_feed_date(&dtstart) else {
        warn!(line = raw.line, dtstart = %dtstart, "skipping event with malformed date");
        return None;
    };

    let cleaned = clean_name(&summary);
    let name = table.canonical(&cleaned).trim();
    if name.is_empty() {
        debug!(line = raw.line, summary = %summary, "discarding event with blank name");
        return None;
    }

    let (sunday, weekday) = cycles_for(date);
    Some(
        LiturgicalEvent::new(name, date)
            .with_rank(parse_rank(&summary))
            .with_color(parse_color(&summary))
            .with_cycles(sunday, Some(weekday)),
    )
}

/// Normalizes a raw feed into events, in feed order
pub fn normalize(feed: &str, table: &TranslationTable) -> Vec<LiturgicalEvent> {
    let blocks = collect_blocks(feed);
    let total = blocks.len();

    let events: Vec<LiturgicalEvent> = blocks
        .into_iter()
        .filter_map(|raw| build_event(raw, table))
        .collect();

    info!(blocks = total, events = events.len(), "normalized feed");
    events
}
