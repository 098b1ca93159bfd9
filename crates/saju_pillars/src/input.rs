//! Timestamp intake. Every accepted form carries an explicit UTC offset;
//! the host time zone and the current time are never consulted.

use chrono::{DateTime, FixedOffset};
use saju_time::{parse_timestamp, timestamp_from_unix_seconds};

use crate::error::SajuError;

/// Parse RFC 3339 (or `YYYY-MM-DD HH:MM[:SS]±HH:MM`) text.
pub fn timestamp_from_str(text: &str) -> Result<DateTime<FixedOffset>, SajuError> {
    Ok(parse_timestamp(text)?)
}

/// Instant from Unix seconds, viewed at `utc_offset_seconds`.
pub fn timestamp_from_unix(
    seconds: f64,
    utc_offset_seconds: i32,
) -> Result<DateTime<FixedOffset>, SajuError> {
    Ok(timestamp_from_unix_seconds(seconds, utc_offset_seconds)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_offset_rejected() {
        assert!(matches!(
            timestamp_from_str("2023-10-15T12:00:00"),
            Err(SajuError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn non_finite_seconds_rejected() {
        for s in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                timestamp_from_unix(s, 0),
                Err(SajuError::InvalidTimestamp(_))
            ));
        }
    }

    #[test]
    fn unix_keeps_offset() {
        let ts = timestamp_from_unix(0.0, 9 * 3600).unwrap();
        assert_eq!(ts.to_rfc3339(), "1970-01-01T09:00:00+09:00");
    }
}
