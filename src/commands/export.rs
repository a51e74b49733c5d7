use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use daybook_core::csv::generate_csv;
use owo_colors::OwoColorize;

use crate::storage;

pub fn run(output: Option<PathBuf>) -> Result<()> {
    let store = storage::load()?;
    let csv = generate_csv(store.events());

    match output {
        Some(path) => {
            fs::write(&path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{}",
                format!("Exported {} events to {}", store.len(), path.display()).green()
            );
        }
        None => print!("{}", csv),
    }

    Ok(())
}
