use anyhow::Result;
use daybook_core::slots::SLOTS_PER_DAY;
use owo_colors::OwoColorize;

use crate::input;
use crate::render::{self, Render};
use crate::storage;

pub fn run(date: &str) -> Result<()> {
    let date = input::parse_date(date)?;
    let store = storage::load()?;

    println!("{}", render::date_label(date).bold());

    for event in store.events_on(date) {
        println!("  {}", event.render());
    }

    let occupancy = store.day_occupancy(date, None);
    let free_ranges = free_ranges(|index| occupancy.is_occupied(index));

    if free_ranges.is_empty() {
        println!("  {}", "Fully booked".red());
        return Ok(());
    }

    println!("  {}", "Free:".dimmed());
    for (start, end) in free_ranges {
        println!(
            "    {}",
            format!("{}-{}", slot_label(start), slot_label(end)).green()
        );
    }

    Ok(())
}

/// Contiguous runs of free slots as half-open `(start, end)` index pairs.
fn free_ranges(is_occupied: impl Fn(usize) -> bool) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;

    for index in 0..SLOTS_PER_DAY {
        if is_occupied(index) {
            if let Some(start) = run_start.take() {
                ranges.push((start, index));
            }
        } else if run_start.is_none() {
            run_start = Some(index);
        }
    }
    if let Some(start) = run_start {
        ranges.push((start, SLOTS_PER_DAY));
    }

    ranges
}

/// HH:MM label for a slot boundary; index 48 is the end of the day.
fn slot_label(index: usize) -> String {
    if index == SLOTS_PER_DAY {
        return "24:00".to_string();
    }
    format!("{:02}:{:02}", index / 2, (index % 2) * 30)
}
