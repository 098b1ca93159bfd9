//! Analytic solar and lunar models for calendar boundary search.
//!
//! This crate provides:
//! - Apparent geocentric solar longitude (Meeus ch. 25 + nutation + aberration)
//! - True new-moon instants by lunation number (Meeus ch. 49)
//! - A coarse-scan + bisection zero-crossing search
//! - The supported year range shared by every layer above

pub mod error;
pub mod lunation;
pub mod nutation;
pub mod search;
pub mod sun;

pub use error::EphemError;
pub use lunation::{
    SYNODIC_MONTH_DAYS, new_moon_at_or_before, new_moon_jde, new_moon_ut, next_new_moon,
};
pub use nutation::nutation_in_longitude_arcsec;
pub use search::{find_zero_crossing, normalize_360, normalize_to_pm180};
pub use sun::{
    MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, TROPICAL_YEAR_DAYS, check_supported_year,
    next_longitude_crossing, sun_apparent_longitude, sun_longitude_at, sun_true_longitude,
};
