//! Booking assembly: entity resolution and pricing.
//!
//! Runs after validation has passed. Resolves the client and event type a
//! booking references (creating them on first sight), computes the total
//! price, and returns a persistence-ready record. Assembly never persists
//! and holds no retryable state — it is a single resolve → compute →
//! return pass.

use serde_json::Value;
use tracing::debug;

use crate::coerce::safe_float;
use crate::error::Result;
use crate::store::Directory;
use crate::types::{BookingRecord, Client, EventType, ProposedBooking};

/// Room rate plus add-ons total.
///
/// Malformed or missing pricing input defaults to zero rather than
/// failing — quiet recovery is the policy for legacy pricing data.
pub fn compute_total(room_rate: &Value, addons_total: &Value) -> f64 {
    safe_float(room_rate, 0.0) + safe_float(addons_total, 0.0)
}

/// Resolves booking references through a [`Directory`] and builds the
/// final record.
pub struct BookingAssembler<'a, D: Directory> {
    directory: &'a D,
}

impl<'a, D: Directory> BookingAssembler<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Exact-name lookup, creating the client only on a miss.
    ///
    /// Repeated calls with the same name hand back the same record — no
    /// duplicate clients across repeated bookings.
    pub fn resolve_or_create_client(&self, name: &str, contact: Option<&str>) -> Result<Client> {
        if let Some(existing) = self.directory.find_client_by_name(name)? {
            return Ok(existing);
        }
        let created = self.directory.create_client(name, contact)?;
        debug!(client_id = created.id, name, "created client");
        Ok(created)
    }

    /// Same resolve-or-create contract as clients.
    pub fn resolve_or_create_event_type(&self, name: &str) -> Result<EventType> {
        if let Some(existing) = self.directory.find_event_type_by_name(name)? {
            return Ok(existing);
        }
        let created = self.directory.create_event_type(name)?;
        debug!(event_type_id = created.id, name, "created event type");
        Ok(created)
    }

    /// Resolve referenced entities, compute the price, and return the
    /// record for the caller to persist.
    pub fn assemble(
        &self,
        proposed: &ProposedBooking,
        room_rate: &Value,
        addons_total: &Value,
    ) -> Result<BookingRecord> {
        let client = self.resolve_or_create_client(
            &proposed.client_name,
            proposed.client_contact.as_deref(),
        )?;
        let event_type = self.resolve_or_create_event_type(&proposed.event_type)?;

        Ok(BookingRecord {
            room_id: proposed.room_id,
            client_id: client.id,
            event_type_id: event_type.id,
            start_time: proposed.start_time,
            end_time: proposed.end_time,
            attendees: proposed.attendees,
            status: proposed.status,
            total_price: compute_total(room_rate, addons_total),
            notes: proposed.notes.clone(),
            purpose: proposed.purpose.clone(),
        })
    }
}
