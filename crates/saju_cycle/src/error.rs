//! Parse errors for stems, branches and pillars.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing cycle symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseCycleError {
    UnknownStem(String),
    UnknownBranch(String),
    /// Text is not a two-symbol stem-branch pair.
    Malformed(String),
    /// Stem and branch differ in polarity, so the pair is not in the cycle.
    MixedPolarity { stem: &'static str, branch: &'static str },
}

impl Display for ParseCycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStem(s) => write!(f, "unknown heavenly stem: {s:?}"),
            Self::UnknownBranch(s) => write!(f, "unknown earthly branch: {s:?}"),
            Self::Malformed(s) => write!(f, "not a stem-branch pair: {s:?}"),
            Self::MixedPolarity { stem, branch } => {
                write!(f, "{stem}{branch} is not a sexagenary pair (polarity mismatch)")
            }
        }
    }
}

impl Error for ParseCycleError {}
