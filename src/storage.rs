//! JSON persistence of the event list.
//!
//! The store itself is persistence-agnostic; this module is the collaborator
//! that loads the list at startup and writes it back after a successful
//! mutation. Loading replays the records through the store so conflicting or
//! duplicate data on disk is rejected instead of silently accepted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use daybook_core::{Event, EventStore};

/// Events file under the platform data directory,
/// e.g. ~/.local/share/daybook/events.json on Linux.
pub fn events_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data_dir.join("daybook").join("events.json"))
}

pub fn load() -> Result<EventStore> {
    load_from(&events_path()?)
}

pub fn save(store: &EventStore) -> Result<()> {
    save_to(&events_path()?, store)
}

/// Load a store from a file. A missing file yields an empty store.
pub fn load_from(path: &Path) -> Result<EventStore> {
    if !path.exists() {
        return Ok(EventStore::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    EventStore::from_events(events)
        .with_context(|| format!("Invalid event data in {}", path.display()))
}

/// Write the store back, creating the parent directory if needed.
pub fn save_to(path: &Path, store: &EventStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(store.events())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
