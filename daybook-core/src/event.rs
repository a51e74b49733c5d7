//! Scheduled event types.
//!
//! A single calendar entry: one date, a half-hour-aligned time range and
//! free-text detail fields. The store and the CLI work exclusively with
//! these types.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Identifier for an event, assigned by the caller.
///
/// Zero is reserved as the "missing id" value and is rejected by the store.
pub type EventId = u32;

/// A scheduled event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub location: String,
    /// Calendar date the event takes place on (local, no timezone)
    pub date: NaiveDate,
    /// Start of the occupied range, half-hour aligned
    pub start_time: NaiveTime,
    /// End of the occupied range, exclusive; 23:59 means "until end of day"
    pub end_time: NaiveTime,
    pub category: Category,
}

impl Event {
    /// The chronological start instant, used as the store's sort key.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

/// Category an event is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Work,
    Personal,
    Others,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "others" | "other" => Ok(Category::Others),
            _ => Err(format!(
                "Unknown category '{}'. Expected work, personal or others",
                s
            )),
        }
    }
}
