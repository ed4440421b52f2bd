//! Lenient Timestamp Decoding
//!
//! Stored and fetched `createdAt` values are not always RFC 3339. One odd
//! value must not make a whole document unreadable, so decoding accepts
//! common variants and falls back to the Unix epoch instead of failing.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp string
///
/// Zoned values keep their offset. Date-time values without a zone are
/// local time; date-only values are midnight UTC.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|ts| ts.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse(raw),
        // Milliseconds since the epoch
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// `deserialize_with` for required timestamps; unreadable values become the epoch
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_value(&value).unwrap_or_else(|| {
        log::warn!("Unreadable timestamp {}, using the epoch", value);
        DateTime::UNIX_EPOCH
    }))
}

/// `deserialize_with` for optional timestamps; unreadable values become `None`
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    let parsed = from_value(&value);
    if parsed.is_none() {
        log::warn!("Unreadable timestamp {}, ignoring it", value);
    }
    Ok(parsed)
}
