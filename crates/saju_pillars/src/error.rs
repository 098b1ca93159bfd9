//! Error taxonomy of the pillar calculator.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_calendar::{CalendarError, SolarTerm};
use saju_time::TimeError;

/// Errors returned by pillar computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuError {
    /// Timestamp is malformed, lacks a UTC offset, or is not representable.
    InvalidTimestamp(String),
    /// Instant lies outside the supported calendar range.
    UnsupportedYearRange { year: i32, min: i32, max: i32 },
    /// Instant lies within the configured tolerance of a Jie term.
    AmbiguousBoundary {
        term: SolarTerm,
        /// Signed; negative when the instant precedes the term.
        seconds_from_boundary: f64,
    },
    InvalidOptions(&'static str),
    /// Failure in the astronomical calendar layer.
    Calendar(CalendarError),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp(msg) => write!(f, "invalid timestamp: {msg}"),
            Self::UnsupportedYearRange { year, min, max } => {
                write!(f, "year {year} outside supported range {min}..={max}")
            }
            Self::AmbiguousBoundary {
                term,
                seconds_from_boundary,
            } => write!(
                f,
                "instant is {seconds_from_boundary:+.1} s from {} ({}); pillars are ambiguous",
                term.hanja(),
                term.name()
            ),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for SajuError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::UnsupportedYearRange { year, min, max } => {
                Self::UnsupportedYearRange { year, min, max }
            }
            other => Self::Calendar(other),
        }
    }
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidTimestamp(msg) => Self::InvalidTimestamp(msg),
            other => Self::InvalidTimestamp(other.to_string()),
        }
    }
}
