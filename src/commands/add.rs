use anyhow::{bail, Result};
use daybook_core::{Category, Event, EventId, EventStore};
use owo_colors::OwoColorize;

use crate::input;
use crate::storage;

#[allow(clippy::too_many_arguments)]
pub fn run(
    title: String,
    date: String,
    start: String,
    end: String,
    category: String,
    description: Option<String>,
    location: Option<String>,
    link: Option<String>,
) -> Result<()> {
    input::require_title(&title)?;
    let date = input::parse_date(&date)?;
    let start_time = input::parse_start_time(&start)?;
    let end_time = input::parse_end_time(&end)?;
    if start_time >= end_time {
        bail!("Please provide a valid time range: start must be before end");
    }
    let category: Category = category.parse().map_err(anyhow::Error::msg)?;

    let mut store = storage::load()?;
    let event = Event {
        id: next_id(&store),
        title,
        description: description.unwrap_or_default(),
        link: link.unwrap_or_default(),
        location: location.unwrap_or_default(),
        date,
        start_time,
        end_time,
        category,
    };

    let summary = format!(
        "Created: {} on {} {}-{}",
        event.title,
        event.date.format("%Y-%m-%d"),
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M"),
    );

    store.add(event)?;
    storage::save(&store)?;

    println!("{}", summary.green());
    Ok(())
}

/// One past the highest id in use. The store only requires ids to be unique
/// and non-zero; allocating sequentially keeps them predictable.
fn next_id(store: &EventStore) -> EventId {
    store.events().iter().map(|e| e.id).max().unwrap_or(0) + 1
}
