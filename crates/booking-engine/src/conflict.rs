//! Room-scoped conflict detection.
//!
//! Retrieves the bookings that overlap a proposed interval and classifies
//! each by status, so the validator can separate hard blocks from advisory
//! holds. Adjacent bookings (one ending exactly when the next starts) are
//! NOT conflicts.
//!
//! Detection is read-only and takes no lock. Two concurrent requests for
//! the same slot can both pass and both persist — a known limitation of
//! the check-then-create sequence, accepted rather than papered over with
//! transactions the backing store does not provide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::BookingStore;
use crate::types::{BookingStatus, BookingSummary};

/// How hard a detected conflict pushes back on the proposed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictSeverity {
    /// Overlaps a confirmed booking — blocks persistence.
    Blocking,
    /// Overlaps a tentative or pending hold — informational only.
    Advisory,
}

/// Severity of overlapping a booking in the given status, if that status
/// is conflict-relevant at all.
///
/// Cancelled bookings never conflict, and a completed booking describes a
/// finished past event.
pub fn severity_of(status: BookingStatus) -> Option<ConflictSeverity> {
    match status {
        BookingStatus::Confirmed => Some(ConflictSeverity::Blocking),
        BookingStatus::Tentative | BookingStatus::Pending => Some(ConflictSeverity::Advisory),
        BookingStatus::Cancelled | BookingStatus::Completed => None,
    }
}

/// Half-open interval overlap test.
///
/// `[a_start, a_end)` and `[b_start, b_end)` overlap iff
/// `a_start < b_end && b_start < a_end` — touching boundaries do not
/// overlap.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// A single overlapping booking, annotated for the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConflict {
    pub booking_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub severity: ConflictSeverity,
    pub overlap_minutes: i64,
}

/// All conflicts found for one proposed interval in one room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicts: Vec<RoomConflict>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Conflicts that block persistence.
    pub fn blocking(&self) -> impl Iterator<Item = &RoomConflict> {
        self.conflicts
            .iter()
            .filter(|c| c.severity == ConflictSeverity::Blocking)
    }

    /// Conflicts that only warn.
    pub fn advisory(&self) -> impl Iterator<Item = &RoomConflict> {
        self.conflicts
            .iter()
            .filter(|c| c.severity == ConflictSeverity::Advisory)
    }
}

/// Finds and classifies overlapping bookings for a single room.
pub struct ConflictDetector<'a, S: BookingStore> {
    store: &'a S,
}

impl<'a, S: BookingStore> ConflictDetector<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// One `find_overlapping` round trip, then pure classification.
    ///
    /// A store failure propagates — "could not determine" is distinct from
    /// "no conflicts found".
    pub fn detect(
        &self,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ConflictReport> {
        let existing = self.store.find_overlapping(room_id, start, end)?;
        Ok(classify(&existing, start, end))
    }
}

/// Classify fetched summaries against the proposed interval.
///
/// Stores may return a coarse superset (a day-page query, say), so the
/// half-open test is re-applied here before classifying.
fn classify(existing: &[BookingSummary], start: DateTime<Utc>, end: DateTime<Utc>) -> ConflictReport {
    let mut conflicts = Vec::new();

    for booking in existing {
        if !overlaps(start, end, booking.start_time, booking.end_time) {
            continue;
        }
        let Some(severity) = severity_of(booking.status) else {
            continue;
        };

        let overlap_start = start.max(booking.start_time);
        let overlap_end = end.min(booking.end_time);
        conflicts.push(RoomConflict {
            booking_id: booking.id,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
            severity,
            overlap_minutes: (overlap_end - overlap_start).num_minutes(),
        });
    }

    ConflictReport { conflicts }
}
