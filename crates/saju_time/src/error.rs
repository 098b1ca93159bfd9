//! Error types for timestamp handling and time-scale conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from timestamp parsing, validation, or Julian Date conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input could not be turned into an instant with an explicit UTC offset.
    InvalidTimestamp(String),
    /// Julian Date does not map onto a representable calendar instant.
    OutOfRange { jd: f64 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp(msg) => write!(f, "invalid timestamp: {msg}"),
            Self::OutOfRange { jd } => write!(f, "Julian Date {jd} is not representable"),
        }
    }
}

impl Error for TimeError {}
