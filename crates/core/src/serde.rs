//! Serde helper functions for backend timestamps.
//!
//! The meetings backend emits both RFC 3339 timestamps and naive
//! `YYYY-MM-DDTHH:MM:SS[.fff]` values without an offset. Naive values are
//! read as UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a backend timestamp, accepting RFC 3339 or a naive UTC timestamp.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Deserialize a timestamp that may or may not carry an offset.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s:?}")))
}

/// Returns the current time with a UTC offset, for freshly created records.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}
