//! In-memory store and directory adapters.
//!
//! Back the engine in tests and small single-process deployments. Both are
//! `Mutex`-guarded so they satisfy the `&self` trait contracts; a poisoned
//! lock is recovered rather than propagated, since the guarded data is a
//! plain vector that cannot be left half-written.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::conflict::overlaps;
use crate::error::Result;
use crate::store::{BookingStore, Directory};
use crate::types::{BookingStatus, BookingSummary, Client, EventType};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory booking table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookings: Mutex<Vec<BookingSummary>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a booking and return its assigned id. Ids are monotonic
    /// starting at 1.
    pub fn insert(
        &self,
        room_id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        status: BookingStatus,
    ) -> i64 {
        let mut bookings = lock(&self.bookings);
        let id = bookings.len() as i64 + 1;
        bookings.push(BookingSummary {
            id,
            room_id,
            start_time,
            end_time,
            status,
        });
        id
    }

    /// Number of stored bookings, cancelled included.
    pub fn len(&self) -> usize {
        lock(&self.bookings).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BookingStore for MemoryStore {
    fn find_overlapping(
        &self,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BookingSummary>> {
        let bookings = lock(&self.bookings);
        Ok(bookings
            .iter()
            .filter(|b| b.room_id == room_id)
            .filter(|b| b.status != BookingStatus::Cancelled)
            .filter(|b| overlaps(start, end, b.start_time, b.end_time))
            .cloned()
            .collect())
    }
}

/// In-memory client/event-type directory.
///
/// Creation is name-keyed: creating a name that already exists hands back
/// the existing record instead of growing a duplicate.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    clients: Mutex<Vec<Client>>,
    event_types: Mutex<Vec<EventType>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct clients.
    pub fn client_count(&self) -> usize {
        lock(&self.clients).len()
    }

    /// Number of distinct event types.
    pub fn event_type_count(&self) -> usize {
        lock(&self.event_types).len()
    }
}

impl Directory for MemoryDirectory {
    fn find_client_by_name(&self, name: &str) -> Result<Option<Client>> {
        let clients = lock(&self.clients);
        Ok(clients.iter().find(|c| c.name == name).cloned())
    }

    fn create_client(&self, name: &str, contact: Option<&str>) -> Result<Client> {
        let mut clients = lock(&self.clients);
        if let Some(existing) = clients.iter().find(|c| c.name == name) {
            return Ok(existing.clone());
        }
        let client = Client {
            id: clients.len() as i64 + 1,
            name: name.to_string(),
            contact: contact.map(str::to_string),
        };
        clients.push(client.clone());
        Ok(client)
    }

    fn find_event_type_by_name(&self, name: &str) -> Result<Option<EventType>> {
        let event_types = lock(&self.event_types);
        Ok(event_types.iter().find(|e| e.name == name).cloned())
    }

    fn create_event_type(&self, name: &str) -> Result<EventType> {
        let mut event_types = lock(&self.event_types);
        if let Some(existing) = event_types.iter().find(|e| e.name == name) {
            return Ok(existing.clone());
        }
        let event_type = EventType {
            id: event_types.len() as i64 + 1,
            name: name.to_string(),
        };
        event_types.push(event_type.clone());
        Ok(event_type)
    }
}
