//! Domain records for bookings, rooms, clients, and event types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::error::{EngineError, Result};

/// Confidence level of a booking.
///
/// Read during conflict classification; transitions between statuses are
/// driven by the calling application, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Tentative,
    Confirmed,
    Cancelled,
    Completed,
    #[default]
    Pending,
}

impl BookingStatus {
    /// Loose parse used when normalizing form input. Unrecognized text maps
    /// to [`BookingStatus::Pending`].
    pub fn parse_loose(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "tentative" => BookingStatus::Tentative,
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Tentative => "tentative",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Pending => "pending",
        }
    }
}

/// The slice of a persisted booking that conflict detection needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: i64,
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

/// An in-memory booking candidate built from caller-supplied fields.
///
/// Born from raw input, validated, and — only when nothing blocks — turned
/// into a [`BookingRecord`] by assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedBooking {
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub attendees: u32,
    pub client_name: String,
    pub client_contact: Option<String>,
    pub event_type: String,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub purpose: Option<String>,
}

impl ProposedBooking {
    /// Normalize raw form-like input into a candidate booking.
    ///
    /// The two timestamps are the only hard requirement — an interval
    /// cannot be checked without both endpoints. Every other field coerces
    /// with a default: attendees through [`coerce::safe_int`], status
    /// through the loose parser, free text passed through as-is.
    pub fn from_form(form: &Value) -> Result<Self> {
        let start_time = coerce::parse_datetime(&form["start_time"]).ok_or_else(|| {
            EngineError::InvalidInput("start_time is missing or unparseable".into())
        })?;
        let end_time = coerce::parse_datetime(&form["end_time"]).ok_or_else(|| {
            EngineError::InvalidInput("end_time is missing or unparseable".into())
        })?;

        let status = form["status"]
            .as_str()
            .map(BookingStatus::parse_loose)
            .unwrap_or_default();

        Ok(Self {
            room_id: coerce::safe_int(&form["room_id"], 0),
            start_time,
            end_time,
            attendees: coerce::safe_int(&form["attendees"], 0).max(0) as u32,
            client_name: form["client_name"].as_str().unwrap_or("").trim().to_string(),
            client_contact: non_empty(&form["client_contact"]),
            event_type: form["event_type"].as_str().unwrap_or("").trim().to_string(),
            status,
            notes: non_empty(&form["notes"]),
            purpose: non_empty(&form["purpose"]),
        })
    }

    /// Length of the proposed interval; negative when the interval is
    /// inverted.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

fn non_empty(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A bookable room.
///
/// Capacity is advisory — exceeding it flags a warning, never a hard error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    pub rate: f64,
}

/// A client on whose behalf a booking is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub contact: Option<String>,
}

/// A category of event (workshop, board meeting, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: i64,
    pub name: String,
}

/// A persistence-ready booking produced by assembly.
///
/// The engine never mutates a record after handing it to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub room_id: i64,
    pub client_id: i64,
    pub event_type_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub attendees: u32,
    pub status: BookingStatus,
    pub total_price: f64,
    pub notes: Option<String>,
    pub purpose: Option<String>,
}

/// The outcome of validation: blocking errors and advisory warnings.
///
/// Both lists accumulate independently — an over-capacity booking that also
/// brushes a tentative hold reports one warning for each condition, never
/// deduplicated or prioritized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Verdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing blocks persistence. Warnings may still be present.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}
