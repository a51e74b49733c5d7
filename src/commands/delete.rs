use anyhow::Result;
use daybook_core::EventId;
use owo_colors::OwoColorize;

use crate::storage;

pub fn run(id: EventId) -> Result<()> {
    let mut store = storage::load()?;
    let title = store.find(id).map(|e| e.title.clone());

    // Deleting an unknown id is not an error, just nothing to do.
    let Some(title) = title else {
        println!("{}", format!("No event with ID {}", id).dimmed());
        return Ok(());
    };

    store.delete(id);
    storage::save(&store)?;

    println!("{}", format!("Deleted: {}", title).red());
    Ok(())
}
