//! Terminal rendering for daybook types.
//!
//! Extension trait that adds colored output to core types using owo_colors.

use chrono::NaiveDate;
use daybook_core::{Category, Event};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        match self {
            Category::Work => self.as_str().blue().to_string(),
            Category::Personal => self.as_str().green().to_string(),
            Category::Others => self.as_str().purple().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        );
        let id_tag = format!("#{}", self.id);

        let mut line = format!(
            "{} {} [{}] {}",
            time,
            self.title,
            self.category.render(),
            id_tag.dimmed()
        );
        if !self.location.is_empty() {
            line.push_str(&format!(" @ {}", self.location.dimmed()));
        }
        line
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Sat Jun 1")
pub fn date_label(date: NaiveDate) -> String {
    date_label_from(chrono::Local::now().date_naive(), date)
}

fn date_label_from(today: NaiveDate, date: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today.succ_opt().unwrap_or(today) {
        "Tomorrow".to_string()
    } else {
        date.format("%a %b %-d").to_string()
    }
}
