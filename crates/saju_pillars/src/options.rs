//! Calculation options for the pillar calculator.

use chrono::NaiveDate;
use saju_calendar::KOREAN_UTC_OFFSET_MINUTES;
use saju_cycle::Pillar;
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

const MAX_BOUNDARY_TOLERANCE_SECONDS: f64 = 86_400.0;
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// A civil date with a known day pillar, anchoring all day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEpoch {
    pub date: NaiveDate,
    #[serde(with = "pillar_text")]
    pub pillar: Pillar,
}

impl Default for ReferenceEpoch {
    /// 2023-10-02 is a 癸巳 day.
    fn default() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2023, 10, 2).unwrap_or_default(),
            pillar: Pillar::from_cycle_index(29),
        }
    }
}

/// How the month pillar is reckoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthPillarConvention {
    /// Month changes at each Jie (節) solar term.
    #[default]
    SolarTerm,
    /// Month follows the lunisolar month of the civil date.
    LunarMonth,
}

/// Where the day boundary sits within the 子 hour (23:00–00:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourConvention {
    /// Day changes at 00:00.
    #[default]
    Midnight,
    /// Day changes at 23:00.
    Early23,
}

/// Options for [`PillarCalculator`](crate::PillarCalculator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationOptions {
    pub reference_epoch: ReferenceEpoch,
    pub month_convention: MonthPillarConvention,
    pub zi_hour: ZiHourConvention,
    /// Report `AmbiguousBoundary` within this many seconds of a Jie term.
    /// Zero disables the check.
    pub boundary_tolerance_seconds: f64,
    /// Observer longitude (degrees east). When set, day and hour pillars use
    /// local mean time instead of the timestamp's wall clock.
    pub local_mean_time_longitude: Option<f64>,
    /// Reference meridian of the lunar calendar, minutes east of UTC.
    pub lunar_utc_offset_minutes: i32,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            reference_epoch: ReferenceEpoch::default(),
            month_convention: MonthPillarConvention::SolarTerm,
            zi_hour: ZiHourConvention::Midnight,
            boundary_tolerance_seconds: 0.0,
            local_mean_time_longitude: None,
            lunar_utc_offset_minutes: KOREAN_UTC_OFFSET_MINUTES,
        }
    }
}

impl CalculationOptions {
    pub fn validate(&self) -> Result<(), SajuError> {
        let tol = self.boundary_tolerance_seconds;
        if !tol.is_finite() || tol < 0.0 {
            return Err(SajuError::InvalidOptions(
                "boundary_tolerance_seconds must be finite and non-negative",
            ));
        }
        if tol > MAX_BOUNDARY_TOLERANCE_SECONDS {
            return Err(SajuError::InvalidOptions(
                "boundary_tolerance_seconds must not exceed one day",
            ));
        }
        if let Some(lon) = self.local_mean_time_longitude {
            if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
                return Err(SajuError::InvalidOptions(
                    "local_mean_time_longitude must lie within [-180, 180]",
                ));
            }
        }
        if self.lunar_utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(SajuError::InvalidOptions(
                "lunar_utc_offset_minutes must lie within ±14 h",
            ));
        }
        Ok(())
    }
}

/// Serde adapter storing a pillar as its hanja text (`"癸巳"`).
mod pillar_text {
    use saju_cycle::Pillar;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pillar: &Pillar, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(pillar)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Pillar, D::Error> {
        let text = String::deserialize(d)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let opts = CalculationOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.reference_epoch.pillar.to_string(), "癸巳");
        assert_eq!(opts.reference_epoch.date.to_string(), "2023-10-02");
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [f64::NAN, f64::INFINITY, -1.0, 90_000.0] {
            let opts = CalculationOptions {
                boundary_tolerance_seconds: tol,
                ..Default::default()
            };
            assert!(matches!(opts.validate(), Err(SajuError::InvalidOptions(_))));
        }
    }

    #[test]
    fn rejects_bad_longitude_and_offset() {
        let opts = CalculationOptions {
            local_mean_time_longitude: Some(181.0),
            ..Default::default()
        };
        assert!(opts.validate().is_err());
        let opts = CalculationOptions {
            lunar_utc_offset_minutes: 900,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn toml_roundtrip_uses_text_pillar() {
        let text = r#"
            month_convention = "lunar_month"
            zi_hour = "early23"
            boundary_tolerance_seconds = 30.0

            [reference_epoch]
            date = "2000-01-07"
            pillar = "甲子"
        "#;
        let opts: CalculationOptions = toml::from_str(text).unwrap();
        assert_eq!(opts.month_convention, MonthPillarConvention::LunarMonth);
        assert_eq!(opts.zi_hour, ZiHourConvention::Early23);
        assert_eq!(opts.reference_epoch.pillar.cycle_index(), 0);
        assert_eq!(opts.lunar_utc_offset_minutes, 540);
        let back = toml::to_string(&opts).unwrap();
        assert!(back.contains("pillar = \"甲子\""));
    }

    #[test]
    fn bad_pillar_text_is_a_parse_error() {
        let text = r#"
            [reference_epoch]
            date = "2000-01-07"
            pillar = "甲丑"
        "#;
        assert!(toml::from_str::<CalculationOptions>(text).is_err());
    }
}
