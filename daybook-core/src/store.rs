//! The conflict-aware event store.
//!
//! `EventStore` is the single source of truth for all events. Every mutation
//! re-checks the booking invariants: ids stay unique, no two events on the
//! same date overlap (tested against a fresh 48-slot bitmap), and the list is
//! kept sorted by chronological start instant. Failed mutations leave the
//! store untouched.
//!
//! The store is an owned value: callers hold it, mutate it one operation at a
//! time and read the ordered list back for rendering. It performs no I/O and
//! has no interior locking; a multi-writer adaptation would need to wrap the
//! check-then-commit sequence in a single transaction.

use chrono::NaiveDate;

use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventId};
use crate::slots::DaySlots;

/// In-memory store of scheduled events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from externally persisted records.
    ///
    /// Replays every record through [`add`](Self::add), so data that violates
    /// the booking invariants (duplicate ids, overlapping same-day ranges) is
    /// rejected rather than silently accepted.
    pub fn from_events(events: Vec<Event>) -> StoreResult<Self> {
        let mut store = Self::new();
        for event in events {
            store.add(event)?;
        }
        Ok(store)
    }

    /// Add a new event.
    ///
    /// Fails if the id is missing or already taken, if the time range is
    /// inverted, or if the range overlaps another event on the same date.
    pub fn add(&mut self, event: Event) -> StoreResult<()> {
        if event.id == 0 {
            return Err(StoreError::MissingId);
        }
        if self.events.iter().any(|e| e.id == event.id) {
            return Err(StoreError::DuplicateId(event.id));
        }
        check_time_range(&event)?;

        let occupancy = self.day_occupancy(event.date, None);
        if !occupancy.is_free(event.start_time, event.end_time) {
            return Err(StoreError::SlotConflict);
        }

        self.events.push(event);
        self.sort();
        Ok(())
    }

    /// Replace the stored event with the same id, as a full-record update.
    ///
    /// The event's own previous range is excluded from the conflict check, so
    /// keeping, shrinking or growing within its own slot never self-conflicts.
    pub fn update(&mut self, event: Event) -> StoreResult<()> {
        if event.id == 0 {
            return Err(StoreError::MissingId);
        }
        if !self.events.iter().any(|e| e.id == event.id) {
            return Err(StoreError::NotFound(event.id));
        }
        check_time_range(&event)?;

        let occupancy = self.day_occupancy(event.date, Some(event.id));
        if !occupancy.is_free(event.start_time, event.end_time) {
            return Err(StoreError::SlotConflict);
        }

        for stored in &mut self.events {
            if stored.id == event.id {
                *stored = event;
                break;
            }
        }
        self.sort();
        Ok(())
    }

    /// Remove the event with the given id. No-op if it does not exist.
    pub fn delete(&mut self, id: EventId) {
        self.events.retain(|e| e.id != id);
    }

    /// All events, sorted ascending by chronological start instant.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn find(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events on one calendar date, in start-time order.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.date == date)
    }

    /// Events whose title contains `query`, case-insensitively.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a Event> {
        let needle = query.to_lowercase();
        self.events
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Occupancy bitmap for one date, built from the stored events.
    ///
    /// `exclude` skips a single event id so an update does not conflict with
    /// the record it is replacing.
    pub fn day_occupancy(&self, date: NaiveDate, exclude: Option<EventId>) -> DaySlots {
        let mut slots = DaySlots::new();
        for event in self.events_on(date) {
            if Some(event.id) == exclude {
                continue;
            }
            slots.mark_occupied(event.start_time, event.end_time);
        }
        slots
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn sort(&mut self) {
        // Stable sort; ties cannot occur between non-conflicting events on
        // the same date anyway.
        self.events.sort_by_key(Event::starts_at);
    }
}

fn check_time_range(event: &Event) -> StoreResult<()> {
    if event.start_time >= event.end_time {
        return Err(StoreError::InvalidTimeRange {
            start: event.start_time,
            end: event.end_time,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use chrono::{NaiveDate, NaiveTime};

    fn event(id: EventId, date: &str, start: &str, end: &str) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            description: String::new(),
            link: String::new(),
            location: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            category: Category::Work,
        }
    }

    fn ids(store: &EventStore) -> Vec<EventId> {
        store.events().iter().map(|e| e.id).collect()
    }

    #[test]
    fn add_stores_the_event() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn overlapping_add_fails_and_leaves_store_unchanged() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();

        let err = store
            .add(event(2, "2024-06-01", "10:30", "11:30"))
            .unwrap_err();
        assert_eq!(err, StoreError::SlotConflict);
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn abutting_add_succeeds_in_order() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        store.add(event(3, "2024-06-01", "11:00", "12:00")).unwrap();
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn update_into_anothers_slot_fails_and_keeps_original_times() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        store.add(event(3, "2024-06-01", "11:00", "12:00")).unwrap();

        let err = store
            .update(event(1, "2024-06-01", "11:00", "11:30"))
            .unwrap_err();
        assert_eq!(err, StoreError::SlotConflict);

        let a = store.find(1).unwrap();
        assert_eq!(a.start_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(a.end_time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn delete_frees_the_slot() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        store.add(event(3, "2024-06-01", "11:00", "12:00")).unwrap();

        store.delete(3);
        store.add(event(4, "2024-06-01", "11:00", "12:00")).unwrap();
        assert_eq!(ids(&store), vec![1, 4]);
    }

    #[test]
    fn dates_partition_occupancy() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        // Identical times on a different date never conflict.
        store.add(event(2, "2024-06-02", "10:00", "11:00")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_id_is_rejected() {
        let mut store = EventStore::new();
        assert_eq!(
            store.add(event(0, "2024-06-01", "10:00", "11:00")),
            Err(StoreError::MissingId)
        );
        assert_eq!(
            store.update(event(0, "2024-06-01", "10:00", "11:00")),
            Err(StoreError::MissingId)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        assert_eq!(
            store.add(event(1, "2024-06-02", "10:00", "11:00")),
            Err(StoreError::DuplicateId(1))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn inverted_time_range_is_rejected() {
        let mut store = EventStore::new();
        let err = store
            .add(event(1, "2024-06-01", "11:00", "10:00"))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidTimeRange { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn update_of_unknown_id_fails_with_not_found() {
        let mut store = EventStore::new();
        assert_eq!(
            store.update(event(9, "2024-06-01", "10:00", "11:00")),
            Err(StoreError::NotFound(9))
        );
    }

    #[test]
    fn update_keeping_own_range_succeeds() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();

        // Same range as before: the event's own slots are excluded from the
        // conflict check.
        let mut same = event(1, "2024-06-01", "10:00", "11:00");
        same.title = "Renamed".to_string();
        store.update(same).unwrap();
        assert_eq!(store.find(1).unwrap().title, "Renamed");
    }

    #[test]
    fn update_growing_within_own_slot_succeeds() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        store
            .update(event(1, "2024-06-01", "10:00", "12:00"))
            .unwrap();
        assert_eq!(
            store.find(1).unwrap().end_time,
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
    }

    #[test]
    fn deleting_unknown_id_is_a_noop() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "10:00", "11:00")).unwrap();
        store.delete(42);
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn events_stay_chronologically_sorted() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-02", "09:00", "10:00")).unwrap();
        store.add(event(2, "2024-06-01", "15:00", "16:00")).unwrap();
        store.add(event(3, "2024-06-01", "08:00", "09:00")).unwrap();
        assert_eq!(ids(&store), vec![3, 2, 1]);

        // An update that moves an event re-sorts the list.
        store
            .update(event(3, "2024-06-03", "08:00", "09:00"))
            .unwrap();
        assert_eq!(ids(&store), vec![2, 1, 3]);
    }

    #[test]
    fn no_overlap_holds_after_mixed_mutations() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "09:00", "10:00")).unwrap();
        store.add(event(2, "2024-06-01", "10:00", "11:30")).unwrap();
        store.add(event(3, "2024-06-01", "12:00", "13:00")).unwrap();
        store.delete(2);
        store
            .update(event(1, "2024-06-01", "09:30", "11:00"))
            .unwrap();
        store.add(event(4, "2024-06-01", "11:00", "12:00")).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let on_day: Vec<_> = store.events_on(date).collect();
        for (i, a) in on_day.iter().enumerate() {
            for b in &on_day[i + 1..] {
                assert!(
                    a.end_time <= b.start_time || b.end_time <= a.start_time,
                    "events {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn from_events_rejects_conflicting_data() {
        let records = vec![
            event(1, "2024-06-01", "10:00", "11:00"),
            event(2, "2024-06-01", "10:30", "11:30"),
        ];
        assert_eq!(
            EventStore::from_events(records).unwrap_err(),
            StoreError::SlotConflict
        );
    }

    #[test]
    fn from_events_accepts_and_orders_valid_data() {
        let records = vec![
            event(2, "2024-06-02", "10:00", "11:00"),
            event(1, "2024-06-01", "10:00", "11:00"),
        ];
        let store = EventStore::from_events(records).unwrap();
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn search_matches_title_substring_case_insensitively() {
        let mut store = EventStore::new();
        let mut planning = event(1, "2024-06-01", "10:00", "11:00");
        planning.title = "Sprint Planning".to_string();
        let mut dentist = event(2, "2024-06-01", "12:00", "13:00");
        dentist.title = "Dentist".to_string();
        store.add(planning).unwrap();
        store.add(dentist).unwrap();

        let hits = store.search("plan");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert!(store.search("yoga").is_empty());
    }

    #[test]
    fn day_end_event_blocks_the_last_slot() {
        let mut store = EventStore::new();
        store.add(event(1, "2024-06-01", "22:00", "23:59")).unwrap();
        assert_eq!(
            store.add(event(2, "2024-06-01", "23:30", "23:59")),
            Err(StoreError::SlotConflict)
        );
    }
}
