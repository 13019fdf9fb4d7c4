//! Tests for defensive coercion, fixed-offset conversions, and form
//! normalization.

use booking_engine::coerce::{parse_datetime, safe_float, safe_int};
use booking_engine::localtime::{naive_to_local, to_local, to_utc, LOCAL_OFFSET_HOURS};
use booking_engine::{BookingStatus, EngineError, ProposedBooking};
use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use serde_json::json;

// ---------------------------------------------------------------------------
// safe_float / safe_int
// ---------------------------------------------------------------------------

#[test]
fn safe_float_reads_numbers_and_numeric_strings() {
    assert_eq!(safe_float(&json!(12.5), 0.0), 12.5);
    assert_eq!(safe_float(&json!(-3), 0.0), -3.0);
    assert_eq!(safe_float(&json!("12.5"), 0.0), 12.5);
    assert_eq!(safe_float(&json!("  7 "), 0.0), 7.0);
}

#[test]
fn safe_float_defaults_everything_else() {
    assert_eq!(safe_float(&json!(null), 1.5), 1.5);
    assert_eq!(safe_float(&json!(true), 1.5), 1.5);
    assert_eq!(safe_float(&json!("twelve"), 1.5), 1.5);
    assert_eq!(safe_float(&json!([1, 2]), 1.5), 1.5);
    assert_eq!(safe_float(&json!({"a": 1}), 1.5), 1.5);
}

#[test]
fn safe_int_truncates_floats_toward_zero() {
    assert_eq!(safe_int(&json!(7.9), 0), 7);
    assert_eq!(safe_int(&json!(-7.9), 0), -7);
    assert_eq!(safe_int(&json!("7.9"), 0), 7);
}

#[test]
fn safe_int_reads_integers_and_strings() {
    assert_eq!(safe_int(&json!(42), 0), 42);
    assert_eq!(safe_int(&json!(" 42 "), 0), 42);
    assert_eq!(safe_int(&json!("forty-two"), 9), 9);
    assert_eq!(safe_int(&json!(null), 9), 9);
}

// ---------------------------------------------------------------------------
// parse_datetime
// ---------------------------------------------------------------------------

#[test]
fn parse_datetime_accepts_rfc3339() {
    let dt = parse_datetime(&json!("2025-03-10T09:00:00Z")).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap());
}

#[test]
fn parse_datetime_normalizes_offsets_to_utc() {
    let dt = parse_datetime(&json!("2025-03-10T11:00:00+02:00")).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap());
}

#[test]
fn parse_datetime_treats_naive_stamps_as_utc() {
    let with_seconds = parse_datetime(&json!("2025-03-10T09:00:00")).unwrap();
    let without_seconds = parse_datetime(&json!("2025-03-10T09:00")).unwrap();
    assert_eq!(with_seconds, without_seconds);
    assert_eq!(
        with_seconds,
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    );
}

#[test]
fn parse_datetime_rejects_garbage() {
    assert!(parse_datetime(&json!("next tuesday")).is_none());
    assert!(parse_datetime(&json!(1741597200)).is_none());
    assert!(parse_datetime(&json!(null)).is_none());
}

// ---------------------------------------------------------------------------
// localtime
// ---------------------------------------------------------------------------

#[test]
fn to_local_shifts_by_the_fixed_offset() {
    let utc = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    let local = to_local(utc);
    assert_eq!(local.hour(), 9 + LOCAL_OFFSET_HOURS as u32);
    assert_eq!(local, utc, "same instant, different wall clock");
}

#[test]
fn to_utc_inverts_to_local() {
    let utc = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    let round_tripped = to_utc(to_local(utc).naive_local());
    assert_eq!(round_tripped, utc);
}

#[test]
fn naive_stamps_are_read_as_utc() {
    let naive = NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let local = naive_to_local(naive);
    assert_eq!(local.hour(), 11);
}

#[test]
fn local_midnight_wraps_to_the_previous_utc_day() {
    let naive = NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(1, 0, 0)
        .unwrap();
    let utc = to_utc(naive);
    assert_eq!(utc, Utc.with_ymd_and_hms(2025, 3, 9, 23, 0, 0).unwrap());
}

// ---------------------------------------------------------------------------
// ProposedBooking::from_form
// ---------------------------------------------------------------------------

#[test]
fn from_form_normalizes_a_complete_form() {
    let form = json!({
        "room_id": "3",
        "start_time": "2025-03-10T09:00:00Z",
        "end_time": "2025-03-10T11:00:00Z",
        "attendees": "12",
        "client_name": "  Acme Corp  ",
        "client_contact": "acme@example.com",
        "event_type": "Workshop",
        "status": "Tentative",
        "notes": "",
        "purpose": "planning"
    });

    let booking = ProposedBooking::from_form(&form).unwrap();

    assert_eq!(booking.room_id, 3);
    assert_eq!(booking.attendees, 12);
    assert_eq!(booking.client_name, "Acme Corp");
    assert_eq!(booking.status, BookingStatus::Tentative);
    assert_eq!(booking.notes, None, "blank free text collapses to None");
    assert_eq!(booking.purpose.as_deref(), Some("planning"));
}

#[test]
fn from_form_requires_both_timestamps() {
    let missing_start = json!({ "end_time": "2025-03-10T11:00:00Z" });
    let missing_end = json!({ "start_time": "2025-03-10T09:00:00Z" });

    assert!(matches!(
        ProposedBooking::from_form(&missing_start),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        ProposedBooking::from_form(&missing_end),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn from_form_defaults_the_soft_fields() {
    let form = json!({
        "start_time": "2025-03-10T09:00:00Z",
        "end_time": "2025-03-10T11:00:00Z",
        "attendees": "a roomful",
        "status": "definitely happening"
    });

    let booking = ProposedBooking::from_form(&form).unwrap();

    assert_eq!(booking.attendees, 0);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.client_name, "");
    assert_eq!(booking.client_contact, None);
}

#[test]
fn from_form_clamps_negative_attendees() {
    let form = json!({
        "start_time": "2025-03-10T09:00:00Z",
        "end_time": "2025-03-10T11:00:00Z",
        "attendees": -5
    });

    let booking = ProposedBooking::from_form(&form).unwrap();
    assert_eq!(booking.attendees, 0);
}
