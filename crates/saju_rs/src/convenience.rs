//! High-level functions over the global engine.
//!
//! All of them return [`ProfileError::NotInitialized`] until
//! [`crate::init`] has been called.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use saju_calendar::{CacheStats, LunarCalendar, LunarDate, SolarTermSource, SolarTermTable};
use saju_cycle::FourPillars;

use crate::config::SajuConfig;
use crate::error::ProfileError;
use crate::global::engine;
use crate::profile::SajuProfile;

/// The configuration the global engine was initialized with.
pub fn config() -> Result<SajuConfig, ProfileError> {
    Ok(engine()?.config)
}

/// Full profile of `timestamp`.
pub fn profile(timestamp: &DateTime<FixedOffset>) -> Result<SajuProfile, ProfileError> {
    engine()?.builder.build(timestamp)
}

/// Full profile of an RFC 3339 timestamp with an explicit offset.
pub fn profile_str(text: &str) -> Result<SajuProfile, ProfileError> {
    engine()?.builder.build_str(text)
}

/// The four pillars of `timestamp`, without relations.
pub fn pillars(timestamp: &DateTime<FixedOffset>) -> Result<FourPillars, ProfileError> {
    let eng = engine()?;
    Ok(eng
        .builder
        .calculator()
        .compute_pillars(timestamp, &eng.config.options)?)
}

/// The 24 solar terms opening with `year`'s 立春.
pub fn solar_terms(year: i32) -> Result<Arc<SolarTermTable>, ProfileError> {
    Ok(engine()?.builder.source().terms_for_year(year)?)
}

/// Lunar date of a civil date at the configured reference meridian.
pub fn lunar_date(date: NaiveDate) -> Result<LunarDate, ProfileError> {
    let eng = engine()?;
    let calendar = LunarCalendar::new(eng.config.options.lunar_utc_offset_minutes)?;
    Ok(calendar.to_lunar(date, eng.builder.source())?)
}

/// Pillars at wall-clock `time` for every day from `start` to `end`.
pub fn pillars_for_days(
    start: NaiveDate,
    end: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Result<Vec<(NaiveDate, FourPillars)>, ProfileError> {
    let eng = engine()?;
    Ok(eng
        .builder
        .calculator()
        .pillars_for_days(start, end, time, offset, &eng.config.options)?)
}

/// Activity counters of the global solar-term cache.
pub fn cache_stats() -> Result<CacheStats, ProfileError> {
    Ok(engine()?.builder.source().stats())
}
