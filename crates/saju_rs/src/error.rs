//! Error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_calendar::CalendarError;
use saju_pillars::SajuError;

/// Errors from the profile builder, config loading and the global API.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProfileError {
    /// The global engine has not been initialized. Call [`crate::init`] first.
    NotInitialized,
    /// [`crate::init`] was called more than once.
    AlreadyInitialized,
    /// A config file could not be read.
    ConfigIo { path: String, message: String },
    /// A config file is not valid TOML or has unknown values.
    ConfigParse(String),
    /// A record could not be rendered as JSON.
    Serialize(String),
    /// Error from pillar computation.
    Saju(SajuError),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "saju engine not initialized; call init() first"),
            Self::AlreadyInitialized => write!(f, "saju engine already initialized"),
            Self::ConfigIo { path, message } => {
                write!(f, "failed to read config {path}: {message}")
            }
            Self::ConfigParse(msg) => write!(f, "invalid config: {msg}"),
            Self::Serialize(msg) => write!(f, "serialization failed: {msg}"),
            Self::Saju(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ProfileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Saju(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SajuError> for ProfileError {
    fn from(e: SajuError) -> Self {
        Self::Saju(e)
    }
}

impl From<CalendarError> for ProfileError {
    fn from(e: CalendarError) -> Self {
        Self::Saju(SajuError::from(e))
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

impl From<toml::de::Error> for ProfileError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}
