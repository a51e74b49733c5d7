use anyhow::Result;
use chrono::NaiveDate;
use daybook_core::Event;
use owo_colors::OwoColorize;

use crate::input;
use crate::render::{self, Render};
use crate::storage;

pub fn run(date: Option<String>, query: Option<String>) -> Result<()> {
    let store = storage::load()?;

    let date_filter = match date {
        Some(s) => Some(input::parse_date(&s)?),
        None => None,
    };

    let events: Vec<&Event> = match &query {
        Some(q) => store.search(q),
        None => store.events().iter().collect(),
    };
    let events: Vec<&Event> = events
        .into_iter()
        .filter(|e| date_filter.is_none_or(|d| e.date == d))
        .collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Events arrive chronologically sorted, so grouping by day is a single pass.
    let mut current_date: Option<NaiveDate> = None;
    for event in events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", render::date_label(event.date).bold());
            current_date = Some(event.date);
        }
        println!("  {}", event.render());
    }

    Ok(())
}
