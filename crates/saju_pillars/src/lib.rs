//! Four Pillars (四柱) computation.
//!
//! This crate provides:
//! - [`PillarCalculator`]: year, month, day and hour pillars of an instant
//! - [`CalculationOptions`]: month and 子-hour conventions, reference
//!   epoch, boundary tolerance, local mean time
//! - The [`SajuError`] taxonomy
//! - Parallel day-range batches
//!
//! The year turns at 立春; months turn at the Jie solar terms (or follow
//! the lunar month when so configured); days are whole civil days counted
//! from a reference epoch; hours are the twelve double-hours from 23:00.

pub mod batch;
pub mod calculator;
pub mod error;
pub mod input;
pub mod options;

pub use batch::MAX_BATCH_DAYS;
pub use calculator::{
    MAX_SUPPORTED_DATE, MIN_SUPPORTED_DATE, PillarCalculator, PillarReading, day_pillar,
    hour_pillar, month_pillar, year_pillar,
};
pub use error::SajuError;
pub use input::{timestamp_from_str, timestamp_from_unix};
pub use options::{CalculationOptions, MonthPillarConvention, ReferenceEpoch, ZiHourConvention};
