//! Error types for solar-term and lunar calendar computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_ephem::EphemError;
use saju_time::TimeError;

/// Errors from solar-term search, table construction, or lunar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Requested year lies outside the supported range.
    UnsupportedYearRange { year: i32, min: i32, max: i32 },
    /// An astronomical search failed to bracket or converge.
    NoConvergence(&'static str),
    /// Solar-term moments are missing, out of order, or not increasing.
    InvalidTable(&'static str),
    /// Reference-meridian offset outside ±14 h.
    InvalidUtcOffset(i32),
    /// Time conversion failure.
    Time(TimeError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedYearRange { year, min, max } => {
                write!(f, "year {year} outside supported range {min}..={max}")
            }
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::InvalidTable(msg) => write!(f, "invalid solar-term table: {msg}"),
            Self::InvalidUtcOffset(min) => write!(f, "UTC offset {min} min out of range"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemError> for CalendarError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::UnsupportedYearRange { year, min, max } => {
                Self::UnsupportedYearRange { year, min, max }
            }
            EphemError::NoConvergence(msg) => Self::NoConvergence(msg),
            _ => Self::NoConvergence("ephemeris evaluation failed"),
        }
    }
}

impl From<TimeError> for CalendarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_maps_through() {
        let e: CalendarError = EphemError::UnsupportedYearRange {
            year: 1700,
            min: 1800,
            max: 2200,
        }
        .into();
        assert_eq!(
            e,
            CalendarError::UnsupportedYearRange {
                year: 1700,
                min: 1800,
                max: 2200
            }
        );
        assert!(e.to_string().contains("1700"));
    }
}
