//! Timestamp helpers.
//!
//! Every timestamp held by the store is an ISO-8601 UTC string with millisecond precision
//! and a `Z` suffix. A single fixed format keeps lexicographic ordering identical to
//! chronological ordering, which the event filter relies on.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};

/// Formats a UTC instant as a store timestamp.
///
/// # Example
/// ```ignore
/// let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
/// assert_eq!(iso(at), "2024-01-15T10:00:00.000Z");
/// ```
pub fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current instant as a store timestamp.
pub fn now_iso() -> String {
    iso(Utc::now())
}

/// Store timestamp `minutes` after `at`; negative values point into the past.
pub fn offset_iso(at: DateTime<Utc>, minutes: i64) -> String {
    iso(at + Duration::minutes(minutes))
}

/// Store timestamp `minutes` after the timestamp `at`, or `None` if `at` is not RFC 3339.
pub fn offset_timestamp(at: &str, minutes: i64) -> Option<String> {
    let at = DateTime::parse_from_rfc3339(at).ok()?.with_timezone(&Utc);

    Some(offset_iso(at, minutes))
}

/// Format produced by `datetime-local` inputs.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn parse_input(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), INPUT_FORMAT)
        .ok()
        .map(|at| at.and_utc())
}

/// Converts a pair of minute-precision `datetime-local` values, read as UTC, into an
/// inclusive range of store timestamps.
///
/// The end bound covers its whole minute. Returns `None` unless both bounds parse, so a
/// half-filled range leaves the event log unconstrained.
pub fn range_from_inputs(from: &str, to: &str) -> Option<(String, String)> {
    let start = parse_input(from)?;
    let end = parse_input(to)? + Duration::milliseconds(59_999);

    Some((iso(start), iso(end)))
}
