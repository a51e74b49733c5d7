//! Parsing and validation of user-supplied event fields.
//!
//! The store only enforces id uniqueness, the overlap rule and start < end;
//! everything about the *shape* of the input (date format, half-hour
//! alignment, non-empty title) is the caller's job and lives here.

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime, Timelike};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!("Invalid date '{}'. Expected YYYY-MM-DD", s),
    }
}

/// Parse a start time: HH:MM on the half hour.
pub fn parse_start_time(s: &str) -> Result<NaiveTime> {
    let time = parse_time(s)?;
    if time.minute() % 30 != 0 {
        bail!("Invalid start time '{}'. Expected a :00 or :30 value", s);
    }
    Ok(time)
}

/// Parse an end time: HH:MM on the half hour, or 23:59 meaning end of day.
pub fn parse_end_time(s: &str) -> Result<NaiveTime> {
    let time = parse_time(s)?;
    let is_day_end = time.hour() == 23 && time.minute() == 59;
    if time.minute() % 30 != 0 && !is_day_end {
        bail!("Invalid end time '{}'. Expected a :00 or :30 value, or 23:59", s);
    }
    Ok(time)
}

pub fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Please provide a title for the event");
    }
    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    match NaiveTime::parse_from_str(s, "%H:%M") {
        Ok(time) => Ok(time),
        Err(_) => bail!("Invalid time '{}'. Expected HH:MM", s),
    }
}
