//! Defensive coercion of loosely-typed row values.
//!
//! Rows come back from the hosted REST client as JSON, and legacy data is
//! not guaranteed to be well-typed: prices arrive as strings, attendee
//! counts as floats, timestamps with or without offsets. These helpers
//! substitute defaults instead of failing. The quiet recovery is a
//! deliberate policy — it is centralized here so it stays testable rather
//! than scattered through the call sites.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Coerce a JSON value to `f64`, substituting `default` when it cannot be
/// read as a number.
///
/// Strings are trimmed and parsed; null, booleans, arrays, objects, and
/// unparseable strings all yield the default. No warning is generated.
pub fn safe_float(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(default),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(default),
        _ => default,
    }
}

/// Coerce a JSON value to `i64`, substituting `default` when it cannot be
/// read as an integer.
///
/// Float inputs (and float-looking strings) truncate toward zero.
pub fn safe_int(value: &Value, default: i64) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(default),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(default)
        }
        _ => default,
    }
}

/// Best-effort timestamp parse.
///
/// Tries RFC 3339 first (any offset, normalized to UTC), then a bare
/// `YYYY-MM-DDTHH:MM[:SS]` wall time treated as UTC. Anything else is
/// `None` — the caller decides whether a missing timestamp is fatal.
pub fn parse_datetime(value: &Value) -> Option<DateTime<Utc>> {
    let raw = value.as_str()?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}
