//! Core types for daybook.
//!
//! This crate provides the conflict-aware event store used by daybook-cli:
//! - `Event` and related types for scheduled events
//! - `slots` for half-hour occupancy within a single day
//! - `EventStore` for add/update/delete with overlap detection

pub mod csv;
pub mod error;
pub mod event;
pub mod slots;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{StoreError, StoreResult};
pub use event::{Category, Event, EventId};
pub use store::EventStore;
