//! Astronomical calendar layer: solar terms and the lunisolar calendar.
//!
//! This crate provides:
//! - The 24 solar terms and per-year [`SolarTermTable`]s computed from
//!   apparent solar longitude
//! - [`SolarTermSource`], and [`SolarTermCache`], a deduplicating per-year memo
//! - [`LunarCalendar`], civil date → lunar date with computed leap months

pub mod cache;
pub mod error;
pub mod lunar;
pub mod solar_term;
pub mod term_table;

pub use cache::{CacheStats, SolarTermCache, SolarTermSource};
pub use error::CalendarError;
pub use lunar::{
    CHINESE_UTC_OFFSET_MINUTES, KOREAN_UTC_OFFSET_MINUTES, LunarCalendar, LunarDate, LunarMonth,
};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use term_table::{SolarTermMoment, SolarTermTable, solar_terms_for_year};
