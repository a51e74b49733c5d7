//! Half-hour slot occupancy for a single day.
//!
//! A day is represented as 48 boolean slots (one per 30 minutes, indices
//! 0-47). Conflict checks fill a fresh bitmap from the events already booked
//! on a date and then test the requested range against it. All ranges are
//! half-open: `[start, end)`.
//!
//! Convention for the day-end sentinel: an end time of exactly 23:59 maps to
//! exclusive slot index 48, so an event running to end of day occupies slot
//! 47 in full. Every other time uses the floor rule `hour * 2 + minute / 30`.

use chrono::{NaiveTime, Timelike};

/// Number of 30-minute slots in a day.
pub const SLOTS_PER_DAY: usize = 48;

/// Slot index for a time of day: `hour * 2 + minute / 30` (floor).
///
/// Callers restrict input to :00/:30 values; anything else truncates to the
/// lower slot.
pub fn slot_index(time: NaiveTime) -> usize {
    (time.hour() * 2 + time.minute() / 30) as usize
}

/// Exclusive end index for a range ending at `time`.
///
/// 23:59 is the day-end sentinel and maps past the last slot.
fn end_slot_index(time: NaiveTime) -> usize {
    if time.hour() == 23 && time.minute() == 59 {
        SLOTS_PER_DAY
    } else {
        slot_index(time)
    }
}

/// Occupancy bitmap for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlots {
    slots: [bool; SLOTS_PER_DAY],
}

impl Default for DaySlots {
    fn default() -> Self {
        DaySlots {
            slots: [false; SLOTS_PER_DAY],
        }
    }
}

impl DaySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every slot in `[start, end)` as occupied.
    ///
    /// No-op when the range is empty or inverted.
    pub fn mark_occupied(&mut self, start: NaiveTime, end: NaiveTime) {
        let (start_idx, end_idx) = (slot_index(start), end_slot_index(end));
        if start_idx >= end_idx {
            return;
        }
        for slot in &mut self.slots[start_idx..end_idx] {
            *slot = true;
        }
    }

    /// True iff every slot in `[start, end)` is unoccupied.
    ///
    /// An empty range is vacuously free.
    pub fn is_free(&self, start: NaiveTime, end: NaiveTime) -> bool {
        let (start_idx, end_idx) = (slot_index(start), end_slot_index(end));
        if start_idx >= end_idx {
            return true;
        }
        self.slots[start_idx..end_idx].iter().all(|occupied| !occupied)
    }

    /// Whether a single slot is occupied. Used for rendering day grids.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }
}
