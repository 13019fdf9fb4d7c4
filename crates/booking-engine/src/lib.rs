//! # booking-engine
//!
//! Validation, conflict-detection, and assembly core for a conference-room
//! booking application.
//!
//! The surrounding application (HTTP routes, auth, email, exports) hands
//! this crate raw booking fields plus a clock and data-access capabilities;
//! the crate answers with a [`Verdict`] of blocking errors and advisory
//! warnings, and — when nothing blocks — a persistence-ready
//! [`BookingRecord`]. It never persists anything itself, and it never
//! treats a failed lookup as an empty result.
//!
//! ## Quick start
//!
//! ```rust
//! use booking_engine::{BookingValidator, FixedClock, MemoryStore, ProposedBooking, Room};
//! use chrono::{TimeZone, Utc};
//!
//! let store = MemoryStore::new();
//! let clock = FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap());
//! let validator = BookingValidator::new(&store, &clock);
//!
//! let proposed = ProposedBooking {
//!     room_id: 1,
//!     start_time: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
//!     end_time: Utc.with_ymd_and_hms(2025, 3, 10, 11, 0, 0).unwrap(),
//!     attendees: 8,
//!     client_name: "Acme Corp".into(),
//!     client_contact: None,
//!     event_type: "Workshop".into(),
//!     status: Default::default(),
//!     notes: None,
//!     purpose: None,
//! };
//! let room = Room { id: 1, name: "Boardroom".into(), capacity: 20, rate: 150.0 };
//!
//! let verdict = validator.validate(&proposed, &room).unwrap();
//! assert!(verdict.is_ok());
//! ```
//!
//! ## Modules
//!
//! - [`validate`] — business-rule validation producing a [`Verdict`]
//! - [`conflict`] — room-scoped overlap detection and classification
//! - [`assemble`] — entity resolution and pricing for validated bookings
//! - [`localtime`] — fixed UTC+2 (CAT) display-offset conversions
//! - [`coerce`] — defensive coercion of loosely-typed row values
//! - [`store`] / [`memory`] — data-access traits and in-memory adapters
//! - [`clock`] — injectable time source
//! - [`error`] — error types

pub mod assemble;
pub mod clock;
pub mod coerce;
pub mod conflict;
pub mod error;
pub mod localtime;
pub mod memory;
pub mod store;
pub mod types;
pub mod validate;

pub use assemble::{compute_total, BookingAssembler};
pub use clock::{Clock, FixedClock, SystemClock};
pub use conflict::{
    overlaps, ConflictDetector, ConflictReport, ConflictSeverity, RoomConflict,
};
pub use error::{EngineError, Result};
pub use memory::{MemoryDirectory, MemoryStore};
pub use store::{BookingStore, Directory};
pub use types::{
    BookingRecord, BookingStatus, BookingSummary, Client, EventType, ProposedBooking, Room,
    Verdict,
};
pub use validate::BookingValidator;
