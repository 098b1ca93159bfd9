//! New-moon instants from the lunation series.
//!
//! Mean lunation plus periodic and planetary-argument corrections from
//! Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 49. Lunation number
//! `k = 0` is the new moon of 2000-Jan-06. Results are accurate to well
//! under a minute for modern dates.

use saju_time::{tt_to_ut, ut_to_tt};

use crate::error::EphemError;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// JDE of the mean new moon for lunation 0.
const LUNATION_ZERO_JDE: f64 = 2_451_550.097_66;

/// Planetary-argument corrections: (constant, rate per lunation, amplitude).
#[rustfmt::skip]
static PLANETARY_TERMS: [(f64, f64, f64); 13] = [
    (251.88,  0.016_321, 0.000_165),
    (251.83, 26.651_886, 0.000_164),
    (349.42, 36.412_478, 0.000_126),
    ( 84.66, 18.206_239, 0.000_110),
    (141.74, 53.303_771, 0.000_062),
    (207.14,  2.453_732, 0.000_060),
    (154.84,  7.306_860, 0.000_056),
    ( 34.52, 27.261_239, 0.000_047),
    (207.19,  0.121_824, 0.000_042),
    (291.34,  1.844_379, 0.000_040),
    (161.72, 24.198_154, 0.000_037),
    (239.56, 25.513_099, 0.000_035),
    (331.55,  3.592_518, 0.000_023),
];

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// JDE (TT) of the true new moon for lunation number `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = LUNATION_ZERO_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = 2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let om = 124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let periodic = -0.407_20 * sin_deg(mp)
        + 0.172_41 * e * sin_deg(m)
        + 0.016_08 * sin_deg(2.0 * mp)
        + 0.010_39 * sin_deg(2.0 * f)
        + 0.007_39 * e * sin_deg(mp - m)
        - 0.005_14 * e * sin_deg(mp + m)
        + 0.002_08 * e * e * sin_deg(2.0 * m)
        - 0.001_11 * sin_deg(mp - 2.0 * f)
        - 0.000_57 * sin_deg(mp + 2.0 * f)
        + 0.000_56 * e * sin_deg(2.0 * mp + m)
        - 0.000_42 * sin_deg(3.0 * mp)
        + 0.000_42 * e * sin_deg(m + 2.0 * f)
        + 0.000_38 * e * sin_deg(m - 2.0 * f)
        - 0.000_24 * e * sin_deg(2.0 * mp - m)
        - 0.000_17 * sin_deg(om)
        - 0.000_07 * sin_deg(mp + 2.0 * m)
        + 0.000_04 * sin_deg(2.0 * mp - 2.0 * f)
        + 0.000_04 * sin_deg(3.0 * m)
        + 0.000_03 * sin_deg(mp + m - 2.0 * f)
        + 0.000_03 * sin_deg(2.0 * mp + 2.0 * f)
        - 0.000_03 * sin_deg(mp + m + 2.0 * f)
        + 0.000_03 * sin_deg(mp - m + 2.0 * f)
        - 0.000_02 * sin_deg(mp - m - 2.0 * f)
        - 0.000_02 * sin_deg(3.0 * mp + m)
        + 0.000_02 * sin_deg(4.0 * mp);

    let a1 = 299.77 + 0.107_408 * k - 0.009_173 * t2;
    let mut planetary = 0.000_325 * sin_deg(a1);
    for (c0, rate, amp) in &PLANETARY_TERMS {
        planetary += amp * sin_deg(c0 + rate * k);
    }

    mean + periodic + planetary
}

/// Julian Date (UT) of the true new moon for lunation number `k`.
pub fn new_moon_ut(k: i64) -> f64 {
    tt_to_ut(new_moon_jde(k))
}

/// Lunation number of the last new moon at or before `jd_ut`, with its
/// instant (JD UT).
pub fn new_moon_at_or_before(jd_ut: f64) -> Result<(i64, f64), EphemError> {
    if !jd_ut.is_finite() {
        return Err(EphemError::NoConvergence("non-finite epoch for lunation"));
    }
    let jd_tt = ut_to_tt(jd_ut);
    let mut k = ((jd_tt - LUNATION_ZERO_JDE) / SYNODIC_MONTH_DAYS).floor() as i64 + 1;
    // True new moons stray < 0.6 d from the mean, so two steps always suffice.
    for _ in 0..4 {
        let nm = new_moon_ut(k);
        if nm <= jd_ut {
            if new_moon_ut(k + 1) > jd_ut {
                return Ok((k, nm));
            }
            k += 1;
        } else {
            k -= 1;
        }
    }
    Err(EphemError::NoConvergence("could not bracket new moon"))
}

/// Lunation number and instant (JD UT) of the first new moon strictly after `jd_ut`.
pub fn next_new_moon(jd_ut: f64) -> Result<(i64, f64), EphemError> {
    let (k, _) = new_moon_at_or_before(jd_ut)?;
    Ok((k + 1, new_moon_ut(k + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::calendar_to_jd;

    #[test]
    fn meeus_example_49a() {
        // New moon 1977 Feb 18, 3h37m42s TD: JDE 2443192.65118 (k = -283)
        let jde = new_moon_jde(-283);
        assert!((jde - 2_443_192.651_18).abs() < 1e-3, "got {jde}");
    }

    #[test]
    fn new_moon_jan_2024() {
        // New moon 2024-01-11 11:57 UTC
        let (_, jd) = new_moon_at_or_before(calendar_to_jd(2024, 1, 20.0)).unwrap();
        let expected = calendar_to_jd(2024, 1, 11.0 + 11.95 / 24.0);
        assert!(
            (jd - expected).abs() * 1440.0 < 10.0,
            "off by {:.1} min",
            (jd - expected) * 1440.0
        );
    }

    #[test]
    fn bracketing_is_consistent() {
        let jd = calendar_to_jd(2023, 3, 25.0);
        let (k, prev) = new_moon_at_or_before(jd).unwrap();
        let (k_next, next) = next_new_moon(jd).unwrap();
        assert_eq!(k_next, k + 1);
        assert!(prev <= jd && jd < next);
        let len = next - prev;
        assert!(len > 29.2 && len < 29.9, "lunation length {len}");
    }

    #[test]
    fn exact_new_moon_is_at_or_before_itself() {
        let nm = new_moon_ut(300);
        let (k, jd) = new_moon_at_or_before(nm).unwrap();
        assert_eq!(k, 300);
        assert_eq!(jd, nm);
    }

    #[test]
    fn lunations_increase() {
        let mut prev = new_moon_ut(-2000);
        for k in -1999..-1900 {
            let jd = new_moon_ut(k);
            assert!(jd > prev);
            prev = jd;
        }
    }

    #[test]
    fn non_finite_rejected() {
        assert!(new_moon_at_or_before(f64::NAN).is_err());
    }
}
