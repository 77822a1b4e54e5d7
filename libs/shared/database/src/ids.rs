use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use shared_models::{Appointment, Doctor, RecordId, User};

use crate::store::{CollectionKey, Store};

/// Source of fresh record identifiers.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> RecordId;
}

/// Millisecond timestamps, bumped past the last issued id whenever the clock
/// has not moved on.
#[derive(Debug, Default)]
pub struct MonotonicIdSource {
    last: AtomicI64,
}

impl MonotonicIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never issues an id at or below `last`.
    pub fn starting_after(last: RecordId) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }
}

impl IdSource for MonotonicIdSource {
    fn next_id(&self) -> RecordId {
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = Utc::now().timestamp_millis().max(last + 1);
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}

/// Largest id held in any record collection, or 0 for an empty store.
pub fn largest_stored_id(store: &Store) -> RecordId {
    let users: Vec<User> = store.load_or_default(CollectionKey::Users);
    let doctors: Vec<Doctor> = store.load_or_default(CollectionKey::Doctors);
    let appointments: Vec<Appointment> = store.load_or_default(CollectionKey::Appointments);

    users
        .iter()
        .map(|u| u.id)
        .chain(doctors.iter().map(|d| d.id))
        .chain(appointments.iter().map(|a| a.id))
        .max()
        .unwrap_or(0)
}

/// Plain counter; deterministic ids for tests and fixtures.
#[derive(Debug)]
pub struct SequentialIdSource {
    next: AtomicI64,
}

impl SequentialIdSource {
    pub fn new(first: RecordId) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> RecordId {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn monotonic_ids_are_unique_under_rapid_calls() {
        let ids = MonotonicIdSource::new();
        let issued: Vec<RecordId> = (0..1000).map(|_| ids.next_id()).collect();

        let unique: HashSet<_> = issued.iter().collect();
        assert_eq!(unique.len(), issued.len());
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn monotonic_ids_respect_starting_point() {
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        let ids = MonotonicIdSource::starting_after(far_future);
        assert_eq!(ids.next_id(), far_future + 1);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdSource::new(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
    }
}
