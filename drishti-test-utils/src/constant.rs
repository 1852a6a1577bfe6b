//! Shared values for deterministic tests.

use chrono::{DateTime, TimeZone, Utc};

/// Instant every test clock is pinned to unless a test picks its own.
pub static TEST_ANCHOR_RFC3339: &str = "2024-06-01T12:00:00.000Z";

/// [`TEST_ANCHOR_RFC3339`] as a timestamp.
pub fn test_anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}
