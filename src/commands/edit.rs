use anyhow::{bail, Result};
use daybook_core::{Category, EventId};
use owo_colors::OwoColorize;

use crate::input;
use crate::storage;

#[allow(clippy::too_many_arguments)]
pub fn run(
    id: EventId,
    title: Option<String>,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
    category: Option<String>,
    description: Option<String>,
    location: Option<String>,
    link: Option<String>,
) -> Result<()> {
    let mut store = storage::load()?;

    // The store's update is a full-record replacement, so overlay the
    // provided flags onto the stored record and submit the whole thing.
    let Some(current) = store.find(id) else {
        bail!("No event with ID {} exists", id);
    };
    let mut updated = current.clone();

    if let Some(title) = title {
        input::require_title(&title)?;
        updated.title = title;
    }
    if let Some(date) = date {
        updated.date = input::parse_date(&date)?;
    }
    if let Some(start) = start {
        updated.start_time = input::parse_start_time(&start)?;
    }
    if let Some(end) = end {
        updated.end_time = input::parse_end_time(&end)?;
    }
    if let Some(category) = category {
        updated.category = category.parse::<Category>().map_err(anyhow::Error::msg)?;
    }
    if let Some(description) = description {
        updated.description = description;
    }
    if let Some(location) = location {
        updated.location = location;
    }
    if let Some(link) = link {
        updated.link = link;
    }

    if updated.start_time >= updated.end_time {
        bail!("Please provide a valid time range: start must be before end");
    }

    let summary = format!("Updated: {}", updated.title);
    store.update(updated)?;
    storage::save(&store)?;

    println!("{}", summary.green());
    Ok(())
}
