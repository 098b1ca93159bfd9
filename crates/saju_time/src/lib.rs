//! Time handling for the saju engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - ΔT (TT − UT) and the UT ↔ TT conversion used by the solar/lunar models
//! - Timestamp intake with mandatory UTC offsets
//! - An [`Epoch`] type for instants on the UT Julian Date scale

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod timestamp;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub use delta_t::{delta_t_seconds, tt_to_ut, ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, date_to_jdn,
    jd_to_calendar, jd_to_centuries, local_date_from_jd,
};
pub use timestamp::{parse_timestamp, timestamp_from_unix_seconds};

/// An instant expressed as a Julian Date in UT.
///
/// All calendar boundaries (solar terms, new moons) are stored on this
/// scale, so comparing an `Epoch` against them is a plain `f64` comparison.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    jd_ut: f64,
}

impl Epoch {
    /// Create an epoch from a Julian Date in UT.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    /// Create an epoch from a Julian Date in TT.
    pub fn from_jd_tt(jd_tt: f64) -> Self {
        Self {
            jd_ut: tt_to_ut(jd_tt),
        }
    }

    /// Create an epoch from any chrono date-time (the offset only affects
    /// how the instant was written, not the instant itself).
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
        Self {
            jd_ut: UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY,
        }
    }

    /// Julian Date in UT.
    pub fn as_jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Julian Date in TT.
    pub fn as_jd_tt(self) -> f64 {
        ut_to_tt(self.jd_ut)
    }

    /// Signed seconds from `other` to `self`.
    pub fn seconds_since(self, other: Epoch) -> f64 {
        (self.jd_ut - other.jd_ut) * SECONDS_PER_DAY
    }

    /// The instant as a UTC date-time, rounded to the nanosecond.
    pub fn to_utc(self) -> Result<DateTime<Utc>, TimeError> {
        let seconds = (self.jd_ut - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
        if !seconds.is_finite() {
            return Err(TimeError::OutOfRange { jd: self.jd_ut });
        }
        let mut whole = seconds.floor();
        let mut nanos = ((seconds - whole) * 1e9).round();
        if nanos >= 1e9 {
            whole += 1.0;
            nanos = 0.0;
        }
        DateTime::<Utc>::from_timestamp(whole as i64, nanos as u32)
            .ok_or(TimeError::OutOfRange { jd: self.jd_ut })
    }

    /// Civil date of this instant at a fixed UTC offset.
    pub fn local_date(self, utc_offset_minutes: i32) -> Result<NaiveDate, TimeError> {
        local_date_from_jd(self.jd_ut, utc_offset_minutes)
            .ok_or(TimeError::OutOfRange { jd: self.jd_ut })
    }
}
