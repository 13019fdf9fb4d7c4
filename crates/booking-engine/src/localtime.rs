//! Conversions between UTC and the local display offset.
//!
//! Business hours are interpreted in CAT (UTC+2). CAT observes no daylight
//! saving, so a `FixedOffset` is sufficient — no IANA timezone database is
//! involved and every conversion is total.

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};

/// Hours east of UTC for the local display offset (CAT).
pub const LOCAL_OFFSET_HOURS: i32 = 2;

/// The fixed UTC+2 offset used for all local-time interpretation.
pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(LOCAL_OFFSET_HOURS * 3600).expect("offset is within +/-24h")
}

/// Convert a UTC instant to local wall time.
pub fn to_local(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&local_offset())
}

/// Interpret a naive timestamp as UTC, then convert to local wall time.
///
/// Legacy rows carry un-timezoned stamps that were written in UTC.
pub fn naive_to_local(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    to_local(Utc.from_utc_datetime(&naive))
}

/// Interpret a naive timestamp as local wall time and convert back to UTC.
pub fn to_utc(local_wall: NaiveDateTime) -> DateTime<Utc> {
    match local_offset().from_local_datetime(&local_wall) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // A fixed offset has no gaps or folds; this arm is a fallback,
        // not a reachable path.
        _ => Utc.from_utc_datetime(&local_wall) - Duration::hours(LOCAL_OFFSET_HOURS as i64),
    }
}
