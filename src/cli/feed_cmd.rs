//! Feed commands (import, normalize)

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::output::Output;
use crate::domain::{augment_with, format_date, LiturgicalEvent};
use crate::feed::{self, FeedError};
use crate::storage::{group_by_year, Workspace};

fn read_feed(workspace: &Workspace, file: &Path) -> Result<Vec<LiturgicalEvent>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read feed: {}", file.display()))?;

    let table = workspace.translation_table()?;
    let events = feed::normalize(&content, &table);

    if events.is_empty() {
        return Err(FeedError::Empty).with_context(|| format!("Nothing to import from {}", file.display()));
    }

    Ok(events)
}

/// Normalize a feed and store each year it covers
pub fn import(workspace: &Workspace, output: &Output, file: &Path, fill_weekdays: bool) -> Result<()> {
    let events = read_feed(workspace, file)?;
    let store = workspace.store();

    let mut summary = Vec::new();
    for (year, year_events) in group_by_year(events) {
        let stored = if fill_weekdays {
            augment_with(&year_events, workspace.options())
        } else {
            year_events
        };

        store.write(year, &stored)?;
        info!(year, events = stored.len(), "imported year");
        summary.push((year, stored.len()));
    }

    if output.is_json() {
        let items: Vec<_> = summary
            .iter()
            .map(|(year, count)| serde_json::json!({ "year": year, "events": count }))
            .collect();
        output.data(&serde_json::json!({ "imported": items }));
    } else {
        for (year, count) in &summary {
            println!("{}: {} events", year, count);
        }
        output.success(&format!(
            "Imported {} year(s) into {}",
            summary.len(),
            store.dir().display()
        ));
    }

    Ok(())
}

/// Print the normalized events of a feed
pub fn normalize(workspace: &Workspace, output: &Output, file: &Path) -> Result<()> {
    let events = read_feed(workspace, file)?;

    if output.is_json() {
        output.data(&events);
    } else {
        output.heading(
            &format!("{:<12} {:<20} {:<8} {:<6} NAME", "DATE", "RANK", "COLOR", "CYCLE"),
            80,
        );
        for event in &events {
            println!(
                "{:<12} {:<20} {:<8} {:<6} {}",
                format_date(event.date),
                event.rank.as_str(),
                event.color.as_str(),
                event.cycle_label().unwrap_or_default(),
                event.name
            );
        }
    }

    Ok(())
}
