//! Error types for the daybook event store.

use chrono::NaiveTime;
use thiserror::Error;

use crate::event::EventId;

/// Errors returned by store mutations.
///
/// Both kinds are expected, recoverable, user-facing conditions: the store is
/// left untouched and the caller is expected to surface the message and let
/// the user correct the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("An event ID is required")]
    MissingId,

    #[error("An event with ID {0} already exists")]
    DuplicateId(EventId),

    #[error("No event with ID {0} exists")]
    NotFound(EventId),

    #[error("Event must start before it ends (got {start}..{end})")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("Time slot is already booked or overlaps with another event")]
    SlotConflict,
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
