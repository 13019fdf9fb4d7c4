//! Business-rule validation for proposed bookings.
//!
//! Produces a [`Verdict`] of blocking errors and advisory warnings, as
//! values — validation never throws. Checks run in a fixed order and
//! accumulate; only an inverted interval short-circuits the other temporal
//! checks (a malformed interval cannot be range-checked), and even then
//! the capacity and conflict checks still run on a best-effort basis.

use chrono::{Duration, Timelike};
use tracing::debug;

use crate::clock::Clock;
use crate::conflict::{ConflictDetector, ConflictSeverity};
use crate::error::Result;
use crate::localtime::to_local;
use crate::store::BookingStore;
use crate::types::{ProposedBooking, Room, Verdict};

/// Earliest local hour a booking may start or end.
pub const OPEN_HOUR: u32 = 6;
/// Latest local hour (inclusive) a booking may start.
pub const LAST_START_HOUR: u32 = 22;
/// Latest local hour (inclusive) a booking may end.
pub const LAST_END_HOUR: u32 = 23;
/// Furthest ahead a booking may be placed, in days.
pub const HORIZON_DAYS: i64 = 365;
/// Longest a single booking may run, in hours.
pub const MAX_DURATION_HOURS: i64 = 12;

/// Applies temporal and capacity policy to a proposed booking and folds in
/// the room's conflict report.
///
/// Deterministic: given the same booking, clock reading, and store
/// contents, the verdict is always the same.
pub struct BookingValidator<'a, S: BookingStore, C: Clock> {
    detector: ConflictDetector<'a, S>,
    clock: &'a C,
}

impl<'a, S: BookingStore, C: Clock> BookingValidator<'a, S, C> {
    pub fn new(store: &'a S, clock: &'a C) -> Self {
        Self {
            detector: ConflictDetector::new(store),
            clock,
        }
    }

    /// Validate `proposed` against `room`.
    ///
    /// Returns `Err` only when the conflict lookup fails — a verdict full
    /// of errors is still `Ok`. Callers must not persist when
    /// `verdict.is_ok()` is false.
    pub fn validate(&self, proposed: &ProposedBooking, room: &Room) -> Result<Verdict> {
        let mut verdict = Verdict::new();

        // An inverted interval is reported once; the range checks below
        // would be meaningless against it.
        if proposed.end_time <= proposed.start_time {
            verdict.error("End time must be after start time");
        } else {
            let now = self.clock.now();

            if proposed.start_time < now {
                verdict.error("Start time cannot be in the past");
            }

            if proposed.start_time > now + Duration::days(HORIZON_DAYS) {
                verdict.error(format!(
                    "Start time cannot be more than {HORIZON_DAYS} days in advance"
                ));
            }

            // Business hours are checked on the local (UTC+2) wall clock.
            let start_hour = to_local(proposed.start_time).hour();
            if !(OPEN_HOUR..=LAST_START_HOUR).contains(&start_hour) {
                verdict.error(format!(
                    "Start time must fall between {OPEN_HOUR:02}:00 and {LAST_START_HOUR:02}:59 local time"
                ));
            }

            let end_hour = to_local(proposed.end_time).hour();
            if !(OPEN_HOUR..=LAST_END_HOUR).contains(&end_hour) {
                verdict.error(format!(
                    "End time must fall between {OPEN_HOUR:02}:00 and {LAST_END_HOUR:02}:59 local time"
                ));
            }

            // Exactly the cap is allowed; one second over is not.
            if proposed.duration() > Duration::hours(MAX_DURATION_HOURS) {
                verdict.error(format!(
                    "Booking duration cannot exceed {MAX_DURATION_HOURS} hours"
                ));
            }
        }

        // Capacity is advisory: overbooking is flagged, never blocked.
        if proposed.attendees > room.capacity {
            verdict.warning(format!(
                "Attendee count ({}) exceeds room capacity ({})",
                proposed.attendees, room.capacity
            ));
        }

        // Conflicts run even for an inverted interval (the half-open test
        // simply finds nothing). A lookup failure propagates; it must
        // never read as "no conflicts".
        let report =
            self.detector
                .detect(proposed.room_id, proposed.start_time, proposed.end_time)?;
        for conflict in &report.conflicts {
            let window = format!(
                "{} to {}",
                conflict.start_time.format("%Y-%m-%d %H:%M"),
                conflict.end_time.format("%Y-%m-%d %H:%M")
            );
            match conflict.severity {
                ConflictSeverity::Blocking => {
                    verdict.error(format!("Conflicts with a confirmed booking from {window}"));
                }
                ConflictSeverity::Advisory => {
                    verdict.warning(format!(
                        "Overlaps a {} booking from {window}",
                        conflict.status.as_str()
                    ));
                }
            }
        }

        debug!(
            room_id = proposed.room_id,
            errors = verdict.errors.len(),
            warnings = verdict.warnings.len(),
            "booking validated"
        );

        Ok(verdict)
    }
}
