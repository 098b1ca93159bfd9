//! ΔT = TT − UT1, in seconds.
//!
//! Piecewise polynomials from Espenak & Meeus, _Five Millennium Canon of
//! Solar Eclipses_ (NASA/TP-2006-214141). UTC is treated as UT1; the
//! difference (< 0.9 s) is far below the accuracy the calendar needs.

use crate::julian::{SECONDS_PER_DAY, jd_to_decimal_year};

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1800.0 {
        if year >= 1700.0 {
            let t = year - 1700.0;
            return 8.83 + 0.1603 * t - 0.005_928_5 * t.powi(2) + 0.000_133_36 * t.powi(3)
                - t.powi(4) / 1_174_000.0;
        }
        return long_term(year);
    }
    if year < 1860.0 {
        let t = year - 1800.0;
        return 13.72 - 0.332_447 * t + 0.006_861_2 * t.powi(2) + 0.004_111_6 * t.powi(3)
            - 0.000_374_36 * t.powi(4)
            + 0.000_012_127_2 * t.powi(5)
            - 0.000_000_169_9 * t.powi(6)
            + 0.000_000_000_875 * t.powi(7);
    }
    if year < 1900.0 {
        let t = year - 1860.0;
        return 7.62 + 0.5737 * t - 0.251_754 * t.powi(2) + 0.016_806_68 * t.powi(3)
            - 0.000_447_362_4 * t.powi(4)
            + t.powi(5) / 233_174.0;
    }
    if year < 1920.0 {
        let t = year - 1900.0;
        return -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4);
    }
    if year < 1941.0 {
        let t = year - 1920.0;
        return 21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3);
    }
    if year < 1961.0 {
        let t = year - 1950.0;
        return 29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0;
    }
    if year < 1986.0 {
        let t = year - 1975.0;
        return 45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0;
    }
    if year < 2005.0 {
        let t = year - 2000.0;
        return 63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5);
    }
    if year < 2050.0 {
        let t = year - 2000.0;
        return 62.92 + 0.322_17 * t + 0.005_589 * t.powi(2);
    }
    if year < 2150.0 {
        let u = (year - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year);
    }
    long_term(year)
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Convert a Julian Date in UT to Terrestrial Time.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / SECONDS_PER_DAY
}

/// Convert a Julian Date in Terrestrial Time to UT.
///
/// ΔT changes by about a second per year, so evaluating it at the TT
/// epoch instead of the UT epoch is indistinguishable at this precision.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(jd_to_decimal_year(jd_tt)) / SECONDS_PER_DAY
}
