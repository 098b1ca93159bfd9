//! Nutation in longitude (Δψ), truncated IAU 1980 series.
//!
//! Only the 18 largest lunisolar terms are kept; the omitted terms sum to
//! well under 0.05″, which moves a solar-term instant by about a second.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 22, Table 22.A.
//! Public domain (IAU standard).

/// Fundamental arguments `[D, M, M', F, Ω]` in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M'` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the Moon's ascending node
pub fn fundamental_arguments_deg(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;
    [d, m, mp, f, om]
}

/// Each row: multipliers of `[D, M, M', F, Ω]`, then the sine coefficient
/// of Δψ and its rate per century, both in units of 0.0001″.
#[rustfmt::skip]
static LONGITUDE_TERMS: [([i8; 5], f64, f64); 18] = [
    //  D   M   M'  F   Ω        S         S'
    ([  0,  0,  0,  0,  1], -171_996.0, -174.2),
    ([ -2,  0,  0,  2,  2],  -13_187.0,   -1.6),
    ([  0,  0,  0,  2,  2],   -2_274.0,   -0.2),
    ([  0,  0,  0,  0,  2],    2_062.0,    0.2),
    ([  0,  1,  0,  0,  0],    1_426.0,   -3.4),
    ([  0,  0,  1,  0,  0],      712.0,    0.1),
    ([ -2,  1,  0,  2,  2],     -517.0,    1.2),
    ([  0,  0,  0,  2,  1],     -386.0,   -0.4),
    ([  0,  0,  1,  2,  2],     -301.0,    0.0),
    ([ -2, -1,  0,  2,  2],      217.0,   -0.5),
    ([ -2,  0,  1,  0,  0],     -158.0,    0.0),
    ([ -2,  0,  0,  2,  1],      129.0,    0.1),
    ([  0,  0, -1,  2,  2],      123.0,    0.0),
    ([  2,  0,  0,  0,  0],       63.0,    0.0),
    ([  0,  0,  1,  0,  1],       63.0,    0.1),
    ([  2,  0, -1,  2,  2],      -59.0,    0.0),
    ([  0,  0, -1,  0,  1],      -58.0,   -0.1),
    ([  0,  0,  1,  2,  1],      -51.0,    0.0),
];

/// Nutation in longitude Δψ in arcseconds at `t` Julian centuries (TT).
pub fn nutation_in_longitude_arcsec(t: f64) -> f64 {
    let args = fundamental_arguments_deg(t);
    let mut dpsi = 0.0;
    for (mult, s, s_rate) in &LONGITUDE_TERMS {
        let arg_deg: f64 = mult
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| f64::from(n) * a)
            .sum();
        dpsi += (s + s_rate * t) * arg_deg.to_radians().sin();
    }
    dpsi * 1e-4
}
