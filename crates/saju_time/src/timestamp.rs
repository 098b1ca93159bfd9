//! Timestamp intake: every instant entering the engine carries an explicit
//! UTC offset. The host time zone is never consulted.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::error::TimeError;

/// Alternative layouts accepted after RFC 3339 (all require an offset).
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Largest |Unix seconds| accepted (roughly ±300,000 years).
const MAX_ABS_UNIX_SECONDS: f64 = 1.0e13;

/// Parse a timestamp with an explicit UTC offset.
///
/// Accepts RFC 3339 (`2023-10-15T08:30:00+09:00`, `...Z`) and a few
/// space-separated variants. Text without an offset is rejected.
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, TimeError> {
    let trimmed = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    if NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").is_ok()
    {
        return Err(TimeError::InvalidTimestamp(format!(
            "{trimmed:?} has no UTC offset"
        )));
    }
    Err(TimeError::InvalidTimestamp(format!(
        "{trimmed:?} is not an RFC 3339 timestamp"
    )))
}

/// Build a timestamp from (possibly fractional) Unix seconds and an offset.
pub fn timestamp_from_unix_seconds(
    seconds: f64,
    utc_offset_seconds: i32,
) -> Result<DateTime<FixedOffset>, TimeError> {
    if !seconds.is_finite() {
        return Err(TimeError::InvalidTimestamp(format!(
            "non-finite Unix seconds: {seconds}"
        )));
    }
    if seconds.abs() > MAX_ABS_UNIX_SECONDS {
        return Err(TimeError::InvalidTimestamp(format!(
            "Unix seconds out of range: {seconds}"
        )));
    }
    let offset = FixedOffset::east_opt(utc_offset_seconds).ok_or_else(|| {
        TimeError::InvalidTimestamp(format!("invalid UTC offset: {utc_offset_seconds} s"))
    })?;
    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * 1e9).round();
    if nanos >= 1e9 {
        whole += 1.0;
        nanos = 0.0;
    }
    let utc = DateTime::<Utc>::from_timestamp(whole as i64, nanos as u32).ok_or_else(|| {
        TimeError::InvalidTimestamp(format!("Unix seconds out of range: {seconds}"))
    })?;
    Ok(utc.with_timezone(&offset))
}
