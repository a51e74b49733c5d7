mod commands;
mod input;
mod render;
mod storage;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Manage your event schedule with conflict-aware booking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event
    Add {
        title: String,

        /// Date of the event (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM, on the half hour)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM, on the half hour, or 23:59 for end of day)
        #[arg(short, long)]
        end: String,

        /// Category: work, personal or others
        #[arg(short, long, default_value = "work")]
        category: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        link: Option<String>,
    },
    /// Edit an existing event (omitted flags keep their stored values)
    Edit {
        id: u32,

        #[arg(long)]
        title: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New start time (HH:MM, on the half hour)
        #[arg(long)]
        start: Option<String>,

        /// New end time (HH:MM, on the half hour, or 23:59 for end of day)
        #[arg(long)]
        end: Option<String>,

        /// New category: work, personal or others
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        link: Option<String>,
    },
    /// Delete an event
    Delete { id: u32 },
    /// List events grouped by day
    Agenda {
        /// Only show events on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Only show events whose title contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show booked and free half-hour ranges for a date
    Free {
        /// Date to inspect (YYYY-MM-DD)
        date: String,
    },
    /// Export all events as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            date,
            start,
            end,
            category,
            description,
            location,
            link,
        } => commands::add::run(title, date, start, end, category, description, location, link),
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            category,
            description,
            location,
            link,
        } => commands::edit::run(id, title, date, start, end, category, description, location, link),
        Commands::Delete { id } => commands::delete::run(id),
        Commands::Agenda { date, query } => commands::agenda::run(date, query),
        Commands::Free { date } => commands::free::run(&date),
        Commands::Export { output } => commands::export::run(output),
    }
}
