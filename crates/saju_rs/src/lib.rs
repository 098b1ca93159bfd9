//! Convenience wrapper for the saju four-pillars engine.
//!
//! Provides [`SajuProfileBuilder`] for explicit use, a JSON-ready
//! [`ProfileRecord`], TOML configuration, and a global singleton engine
//! with high-level functions that take timestamps directly.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! init(SajuConfig::default()).expect("engine init");
//!
//! let profile = profile_str("2023-10-15T12:00:00+09:00").unwrap();
//! println!("{}", profile.pillars());
//! println!("{}", profile.to_json_pretty().unwrap());
//! ```

pub mod builder;
pub mod config;
pub mod convenience;
pub mod error;
pub mod global;
pub mod profile;
pub mod record;

pub use builder::SajuProfileBuilder;
pub use config::{CacheConfig, SajuConfig};
pub use convenience::{
    cache_stats, config, lunar_date, pillars, pillars_for_days, profile, profile_str, solar_terms,
};
pub use error::ProfileError;
pub use global::{init, is_initialized};
pub use profile::SajuProfile;
pub use record::{
    BranchInteractionRecord, ElementBalanceRecord, LunarDateRecord, PillarEntries, PillarRecord,
    PillarsRecord, ProfileRecord, SolarTermRecord,
};

// Re-export the types that appear in the convenience API.
pub use saju_calendar::{CacheStats, LunarDate, SolarTerm, SolarTermMoment, SolarTermTable};
pub use saju_cycle::{
    ALL_POSITIONS, Branch, Element, FourPillars, Pillar, PillarPosition, Polarity, Stem,
};
pub use saju_pillars::{
    CalculationOptions, MonthPillarConvention, ReferenceEpoch, SajuError, ZiHourConvention,
    timestamp_from_str, timestamp_from_unix,
};
pub use saju_relations::{
    BranchRelation, DeriveConfig, ShenSha, SpiritBasis, SpiritMarker, TenGod,
};
