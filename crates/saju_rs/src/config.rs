//! Engine configuration, loadable from a TOML file.
//!
//! ```toml
//! [options]
//! month_convention = "solar_term"
//! zi_hour = "early23"
//!
//! [derive]
//! spirit_basis = "day"
//!
//! [cache]
//! warm_years = [2000, 2030]
//! ```
//!
//! Every section and key is optional; missing values take their defaults.

use std::fs;
use std::path::Path;

use saju_pillars::{CalculationOptions, SajuError};
use saju_relations::DeriveConfig;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Solar-term cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Inclusive year range to compute eagerly at [`crate::init`].
    pub warm_years: Option<(i32, i32)>,
}

/// Full configuration for the global engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    pub options: CalculationOptions,
    pub derive: DeriveConfig,
    pub cache: CacheConfig,
}

impl SajuConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ProfileError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ProfileError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ProfileError> {
        toml::to_string(self).map_err(|e| ProfileError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        self.options.validate()?;
        if let Some((start, end)) = self.cache.warm_years {
            if end < start {
                return Err(SajuError::InvalidOptions("cache.warm_years must be ascending").into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_pillars::{MonthPillarConvention, ZiHourConvention};
    use saju_relations::SpiritBasis;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(SajuConfig::from_toml_str("").unwrap(), SajuConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let config = SajuConfig::from_toml_str(
            r#"
            [options]
            month_convention = "lunar_month"
            zi_hour = "early23"
            local_mean_time_longitude = 126.98

            [derive]
            spirit_basis = "day"

            [cache]
            warm_years = [2020, 2025]
            "#,
        )
        .unwrap();
        assert_eq!(config.options.month_convention, MonthPillarConvention::LunarMonth);
        assert_eq!(config.options.zi_hour, ZiHourConvention::Early23);
        assert_eq!(config.options.local_mean_time_longitude, Some(126.98));
        assert_eq!(config.derive.spirit_basis, SpiritBasis::Day);
        assert_eq!(config.cache.warm_years, Some((2020, 2025)));
    }

    #[test]
    fn unknown_convention_is_parse_error() {
        let err = SajuConfig::from_toml_str("[options]\nzi_hour = \"noon\"\n").unwrap_err();
        assert!(matches!(err, ProfileError::ConfigParse(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = SajuConfig::from_toml_str("[options]\nboundary_tolerance_seconds = -5.0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Saju(SajuError::InvalidOptions(_))
        ));
        let err = SajuConfig::from_toml_str("[cache]\nwarm_years = [2030, 2020]\n").unwrap_err();
        assert!(matches!(err, ProfileError::Saju(SajuError::InvalidOptions(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SajuConfig::load("/nonexistent/saju.toml").unwrap_err();
        assert!(matches!(err, ProfileError::ConfigIo { .. }));
    }

    #[test]
    fn toml_text_round_trips() {
        let mut config = SajuConfig::default();
        config.derive.spirit_basis = SpiritBasis::Day;
        config.cache.warm_years = Some((1990, 2000));
        let text = config.to_toml_string().unwrap();
        assert_eq!(SajuConfig::from_toml_str(&text).unwrap(), config);
    }
}
