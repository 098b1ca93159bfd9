//! Builder tying pillar computation, the lunar calendar and relation
//! derivation into a [`SajuProfile`].

use chrono::{DateTime, FixedOffset, NaiveDate};
use saju_calendar::{LunarCalendar, SolarTermCache, SolarTermSource};
use saju_pillars::{CalculationOptions, PillarCalculator, SajuError, timestamp_from_str};
use saju_relations::{DeriveConfig, RelationalDeriver};
use tracing::debug;

use crate::error::ProfileError;
use crate::profile::SajuProfile;

/// Builds profiles from timestamps using solar terms from `S`.
#[derive(Debug, Clone, Default)]
pub struct SajuProfileBuilder<S = SolarTermCache> {
    calculator: PillarCalculator<S>,
    options: CalculationOptions,
    deriver: RelationalDeriver,
}

impl<S: SolarTermSource> SajuProfileBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            calculator: PillarCalculator::new(source),
            options: CalculationOptions::default(),
            deriver: RelationalDeriver::default(),
        }
    }

    pub fn options(mut self, options: CalculationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn derive_config(mut self, config: DeriveConfig) -> Self {
        self.deriver = RelationalDeriver::new(config);
        self
    }

    pub fn calculation_options(&self) -> &CalculationOptions {
        &self.options
    }

    pub fn calculator(&self) -> &PillarCalculator<S> {
        &self.calculator
    }

    pub fn source(&self) -> &S {
        self.calculator.source()
    }

    /// Profile of `timestamp`.
    pub fn build(&self, timestamp: &DateTime<FixedOffset>) -> Result<SajuProfile, ProfileError> {
        let reading = self.calculator.compute_reading(timestamp, &self.options)?;
        let lunar_date = match reading.lunar_date {
            Some(date) => date,
            None => {
                let calendar = LunarCalendar::new(self.options.lunar_utc_offset_minutes)?;
                let civil = civil_date(timestamp, &calendar)?;
                calendar.to_lunar(civil, self.calculator.source())?
            }
        };
        let relations = self.deriver.derive(&reading.pillars);
        debug!(%timestamp, pillars = %reading.pillars, %lunar_date, "built profile");
        Ok(SajuProfile::new(*timestamp, reading, lunar_date, relations))
    }

    /// Profile of an RFC 3339 timestamp with an explicit offset.
    pub fn build_str(&self, text: &str) -> Result<SajuProfile, ProfileError> {
        self.build(&timestamp_from_str(text)?)
    }
}

/// Civil date of the instant at the calendar's reference meridian.
fn civil_date(
    timestamp: &DateTime<FixedOffset>,
    calendar: &LunarCalendar,
) -> Result<NaiveDate, ProfileError> {
    let offset = FixedOffset::east_opt(calendar.utc_offset_minutes() * 60)
        .ok_or(SajuError::InvalidOptions("lunar_utc_offset_minutes"))?;
    Ok(timestamp.with_timezone(&offset).date_naive())
}
