//! Calendar commands (map, month, day, augment)

use anyhow::{Context, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::app::YearMonth;
use super::output::Output;
use crate::domain::{
    augment_with, build_year_map_with, dominant, format_date, locate_boundaries, map_year,
    month_cycles, sort_for_display, LiturgicalDayContext, LiturgicalEvent, LiturgicalYearMap,
};
use crate::storage::Workspace;

/// One day with its events in display order
#[derive(Serialize)]
struct DayView {
    date: NaiveDate,
    context: Option<LiturgicalDayContext>,
    cycle: Option<String>,
    dominant: Option<LiturgicalEvent>,
    events: Vec<LiturgicalEvent>,
}

impl DayView {
    fn new(date: NaiveDate, map: &LiturgicalYearMap, all: &[LiturgicalEvent]) -> Self {
        let mut events: Vec<LiturgicalEvent> = all.iter().filter(|e| e.date == date).cloned().collect();
        let dominant = dominant(&events).cloned();
        sort_for_display(&mut events);

        Self {
            date,
            context: map.get(date).copied(),
            cycle: dominant.as_ref().and_then(LiturgicalEvent::cycle_label),
            dominant,
            events,
        }
    }

    fn season_label(&self) -> String {
        match &self.context {
            Some(ctx) if ctx.season.has_weeks() => format!("{} {}", ctx.season, ctx.week),
            Some(ctx) => ctx.season.to_string(),
            None => "-".to_string(),
        }
    }
}

/// Show the season and week of every day of a year
pub fn map(workspace: &Workspace, output: &Output, year: i32) -> Result<()> {
    let events = workspace.require_year(year)?;
    let boundaries = locate_boundaries(year, &events)
        .with_context(|| format!("Cannot build the liturgical calendar for {}", year))?;
    let map = map_year(year, &boundaries, workspace.options());

    if output.is_json() {
        let days: Vec<_> = map.iter().collect();
        output.data(&serde_json::json!({
            "year": year,
            "boundaries": boundaries,
            "days": days,
        }));
        return Ok(());
    }

    println!("Liturgical calendar {}", year);
    println!("  First Sunday of Advent  {}", format_date(boundaries.first_sunday_of_advent));
    println!("  Christmas               {}", format_date(boundaries.christmas));
    println!("  Baptism of the Lord     {}", format_date(boundaries.baptism_of_the_lord));
    println!("  Ash Wednesday           {}", format_date(boundaries.ash_wednesday));
    println!("  Holy Thursday           {}", format_date(boundaries.holy_thursday));
    println!("  Easter Sunday           {}", format_date(boundaries.easter_sunday));
    println!("  Pentecost               {}", format_date(boundaries.pentecost));
    println!();
    output.heading(&format!("{:<12} {:<4} {:<20} WEEK", "DATE", "DAY", "SEASON"), 44);
    for ctx in map.iter() {
        println!(
            "{:<12} {:<4} {:<20} {}",
            format_date(ctx.date),
            ctx.date.format("%a").to_string(),
            ctx.season,
            ctx.week
        );
    }

    Ok(())
}

/// Show the events of a month with the lectionary cycles in effect
pub fn month(workspace: &Workspace, output: &Output, month: YearMonth) -> Result<()> {
    let events = workspace.augmented_year(month.year)?;
    let map = build_year_map_with(month.year, &events, workspace.options());

    let first = NaiveDate::from_ymd_opt(month.year, month.month, 1)
        .with_context(|| format!("Invalid month: {}", month))?;
    let next = first
        .checked_add_months(Months::new(1))
        .with_context(|| format!("Invalid month: {}", month))?;

    let days: Vec<DayView> = first
        .iter_days()
        .take_while(|d| *d < next)
        .map(|d| DayView::new(d, &map, &events))
        .collect();
    let cycles = month_cycles(month.year, month.month, &events);

    if output.is_json() {
        output.data(&serde_json::json!({
            "month": month.to_string(),
            "cycles": cycles,
            "days": days,
        }));
        return Ok(());
    }

    match &cycles {
        Some(cycles) => {
            println!("{}  (cycle {})", month, cycles.current);
            if let Some((until, label)) = &cycles.previous {
                println!("  cycle {} until {}", label, format_date(*until));
            }
        }
        None => println!("{}", month),
    }
    println!();

    for day in &days {
        let color = day
            .dominant
            .as_ref()
            .map(|e| e.color.as_str())
            .unwrap_or("-");
        println!(
            "{:<12} {:<4} {:<22} {}",
            format_date(day.date),
            day.date.format("%a").to_string(),
            day.season_label(),
            color
        );
        for event in &day.events {
            println!("    {}", event.name);
        }
    }

    Ok(())
}

/// Show the context and events of a single day
pub fn day(workspace: &Workspace, output: &Output, date: NaiveDate) -> Result<()> {
    let year = date.year();
    let events = workspace.augmented_year(year)?;
    let map = build_year_map_with(year, &events, workspace.options());
    let view = DayView::new(date, &map, &events);

    if output.is_json() {
        output.data(&view);
        return Ok(());
    }

    println!("{} ({})", format_date(date), date.format("%A"));
    println!("Season: {}", view.season_label());
    if let Some(cycle) = &view.cycle {
        println!("Cycle:  {}", cycle);
    }

    if view.events.is_empty() {
        println!("No events.");
        return Ok(());
    }

    println!();
    for event in &view.events {
        let marker = if Some(event) == view.dominant.as_ref() { "*" } else { " " };
        let rank = if event.rank.as_str().is_empty() {
            "weekday"
        } else {
            event.rank.as_str()
        };
        println!("{} {:<20} {:<8} {}", marker, rank, event.color.as_str(), event.name);
    }

    Ok(())
}

/// Add synthesized weekdays to a stored year and save it
pub fn augment(workspace: &Workspace, output: &Output, year: i32) -> Result<()> {
    let events = workspace.require_year(year)?;
    let augmented = augment_with(&events, workspace.options());
    let added = augmented.len().saturating_sub(events.len());

    workspace.store().write(year, &augmented)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "year": year,
            "added": added,
            "events": augmented.len(),
        }));
    } else {
        output.success(&format!(
            "Added {} weekday event(s) to {} ({} total)",
            added,
            year,
            augmented.len()
        ));
    }

    Ok(())
}
