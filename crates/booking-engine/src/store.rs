//! Data-access capabilities consumed by the engine.
//!
//! The engine never talks to the database directly — it is handed these
//! traits at construction time, one per concern. Calls are synchronous
//! blocking round trips (request-per-call semantics), and a failed round
//! trip propagates as [`crate::error::EngineError::DataAccess`]: a failed
//! conflict lookup is never treated as "no conflicts found".

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::{BookingSummary, Client, EventType};

/// Read access to persisted bookings.
pub trait BookingStore {
    /// Bookings in `room_id` whose interval overlaps `[start, end)`.
    ///
    /// Cancelled bookings are excluded. Overlap is half-open: a booking
    /// ending exactly at `start` does not count.
    fn find_overlapping(
        &self,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BookingSummary>>;
}

/// Lookup and creation of the entities a booking references.
///
/// Resolution is an explicit two-step contract: `find_*_by_name` first,
/// `create_*` only on a miss. Repeated identical resolutions must yield
/// the same record, not duplicates.
pub trait Directory {
    fn find_client_by_name(&self, name: &str) -> Result<Option<Client>>;
    fn create_client(&self, name: &str, contact: Option<&str>) -> Result<Client>;
    fn find_event_type_by_name(&self, name: &str) -> Result<Option<EventType>>;
    fn create_event_type(&self, name: &str) -> Result<EventType>;
}
