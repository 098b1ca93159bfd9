//! Error types for the analytic solar and lunar models.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris evaluation or event search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Requested year lies outside the range the models are validated for.
    UnsupportedYearRange { year: i32, min: i32, max: i32 },
    /// Scan or bisection did not bracket / converge on an event.
    NoConvergence(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedYearRange { year, min, max } => {
                write!(f, "year {year} outside supported range {min}..={max}")
            }
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for EphemError {}
