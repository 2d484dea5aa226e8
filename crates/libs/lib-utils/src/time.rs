//! # Time Utilities
//!
//! Utilities for time formatting using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Render a unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Out-of-range values fall back to the raw number.
pub fn format_unix_timestamp(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => secs.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unix_timestamp() {
        assert_eq!(format_unix_timestamp(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_unix_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
        assert_eq!(format_unix_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
