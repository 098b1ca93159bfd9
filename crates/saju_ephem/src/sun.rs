//! Apparent geocentric longitude of the Sun and longitude-crossing search.
//!
//! Mean elements and equation of centre from Meeus, _Astronomical
//! Algorithms_ (2nd ed.), ch. 25, corrected for nutation in longitude and
//! annual aberration. Accuracy is about 0.01°, i.e. a solar-term instant
//! to within roughly a quarter of an hour.

use saju_time::{Epoch, jd_to_centuries, ut_to_tt};
use tracing::trace;

use crate::error::EphemError;
use crate::nutation::nutation_in_longitude_arcsec;
use crate::search::{find_zero_crossing, normalize_360, normalize_to_pm180};

/// First year for which solar-term and lunation results are supported.
pub const MIN_SUPPORTED_YEAR: i32 = 1800;

/// Last year for which solar-term and lunation results are supported.
pub const MAX_SUPPORTED_YEAR: i32 = 2200;

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_19;

/// Constant of aberration in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Convergence tolerance for longitude crossings (≈ 9 ms).
const CROSSING_TOLERANCE_DAYS: f64 = 1e-7;

/// Reject years outside the validated model range.
pub fn check_supported_year(year: i32) -> Result<(), EphemError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(EphemError::UnsupportedYearRange {
            year,
            min: MIN_SUPPORTED_YEAR,
            max: MAX_SUPPORTED_YEAR,
        })
    }
}

/// Geometric longitude of the Sun (mean equinox of date) and its
/// distance in AU, at a Julian Date in TT.
pub fn sun_true_longitude(jd_tt: f64) -> (f64, f64) {
    let t = jd_to_centuries(jd_tt);
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_lon = normalize_360(l0 + c);
    let v = (m + c).to_radians();
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * v.cos());
    (true_lon, r)
}

/// Apparent longitude of the Sun (true equinox of date), degrees in [0, 360).
pub fn sun_apparent_longitude(jd_tt: f64) -> f64 {
    let (true_lon, r) = sun_true_longitude(jd_tt);
    let dpsi = nutation_in_longitude_arcsec(jd_to_centuries(jd_tt));
    let aberration = -ABERRATION_ARCSEC / r;
    normalize_360(true_lon + (dpsi + aberration) / 3600.0)
}

/// Apparent solar longitude at an instant.
pub fn sun_longitude_at(epoch: Epoch) -> f64 {
    sun_apparent_longitude(epoch.as_jd_tt())
}

/// Find when the apparent solar longitude reaches `target_deg`, scanning
/// forward from `jd_ut_from` for at most `max_days` days.
///
/// Returns the crossing as a Julian Date in UT.
pub fn next_longitude_crossing(
    target_deg: f64,
    jd_ut_from: f64,
    max_days: usize,
) -> Result<f64, EphemError> {
    let target = normalize_360(target_deg);
    let f = |jd_ut: f64| normalize_to_pm180(sun_apparent_longitude(ut_to_tt(jd_ut)) - target);
    let root = find_zero_crossing(&f, jd_ut_from, 1.0, max_days, 64, CROSSING_TOLERANCE_DAYS)?
        .ok_or(EphemError::NoConvergence(
            "solar longitude crossing not bracketed",
        ))?;
    trace!(target, jd_ut = root, "solar longitude crossing");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::calendar_to_jd;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: true longitude 199.90988°, R = 0.99766 AU
        let (lon, r) = sun_true_longitude(2_448_908.5);
        assert!((lon - 199.909_88).abs() < 1e-3, "got {lon}");
        assert!((r - 0.997_66).abs() < 1e-4, "got {r}");
        let apparent = sun_apparent_longitude(2_448_908.5);
        assert!((apparent - 199.909).abs() < 0.003, "got {apparent}");
    }

    #[test]
    fn longitude_in_range() {
        for i in 0..50 {
            let lon = sun_apparent_longitude(2_451_545.0 + f64::from(i) * 37.1);
            assert!((0.0..360.0).contains(&lon));
        }
    }

    #[test]
    fn march_equinox_2024() {
        // Equinox 2024-03-20 03:06 UTC
        let jd = next_longitude_crossing(0.0, calendar_to_jd(2024, 3, 15.0), 10).unwrap();
        let expected = calendar_to_jd(2024, 3, 20.0 + 3.1 / 24.0);
        assert!(
            (jd - expected).abs() * 24.0 < 0.5,
            "off by {:.2} h",
            (jd - expected) * 24.0
        );
    }

    #[test]
    fn june_solstice_2024() {
        // Solstice 2024-06-20 20:51 UTC
        let jd = next_longitude_crossing(90.0, calendar_to_jd(2024, 6, 15.0), 10).unwrap();
        let expected = calendar_to_jd(2024, 6, 20.0 + 20.85 / 24.0);
        assert!((jd - expected).abs() * 24.0 < 0.5);
    }

    #[test]
    fn crossing_not_found_in_short_window() {
        let err = next_longitude_crossing(90.0, calendar_to_jd(2024, 1, 1.0), 5).unwrap_err();
        assert!(matches!(err, EphemError::NoConvergence(_)));
    }

    #[test]
    fn supported_year_bounds() {
        assert!(check_supported_year(MIN_SUPPORTED_YEAR).is_ok());
        assert!(check_supported_year(MAX_SUPPORTED_YEAR).is_ok());
        assert!(matches!(
            check_supported_year(1799),
            Err(EphemError::UnsupportedYearRange { year: 1799, .. })
        ));
        assert!(check_supported_year(2201).is_err());
    }
}
