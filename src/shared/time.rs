//! Timestamp rendering.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2021-08-08T07:19:09.775Z`.
pub fn to_iso_string(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp and re-render it with [`to_iso_string`].
pub fn normalize_iso_string(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| to_iso_string(&parsed.with_timezone(&Utc)))
}
