//! Julian Date <-> Gregorian calendar conversions.
//!
//! Algorithms from Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 7.
//! Only the proleptic Gregorian calendar is handled; the engine never
//! works with dates before 1800.

use chrono::NaiveDate;

/// Julian Date of J2000.0 (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Offset between a Julian Day Number and chrono's days-from-CE count
/// (JDN 1721426 = 0001-Jan-01 = day 1 from CE).
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Gregorian calendar date (with fractional day) to Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Julian Date to Gregorian `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0 for a Julian Date on any uniform scale.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal year for a Julian Date (good to a fraction of a day).
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Civil date at a fixed UTC offset for an instant given as JD UT.
///
/// Returns `None` when the date is outside chrono's range.
pub fn local_date_from_jd(jd_ut: f64, utc_offset_minutes: i32) -> Option<NaiveDate> {
    let jdn = (jd_ut + 0.5 + utc_offset_minutes as f64 / 1440.0).floor() as i64;
    let days = i32::try_from(jdn - JDN_CE_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// Julian Day Number (integer, noon-based) of a civil date.
pub fn date_to_jdn(date: NaiveDate) -> i64 {
    i64::from(chrono::Datelike::num_days_from_ce(&date)) + JDN_CE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_calendar() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn calendar_roundtrip() {
        let jd = calendar_to_jd(2023, 2, 4.0 + 2.7 / 24.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2023, 2));
        assert!((d - (4.0 + 2.7 / 24.0)).abs() < 1e-8);
    }

    #[test]
    fn january_and_february_handled() {
        let (y, m, d) = jd_to_calendar(calendar_to_jd(1900, 2, 28.0));
        assert_eq!((y, m), (1900, 2));
        assert!((d - 28.0).abs() < 1e-9);
    }

    #[test]
    fn jdn_of_j2000_date() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(date_to_jdn(date), 2_451_545);
    }

    #[test]
    fn local_date_respects_offset() {
        // 2023-02-04 20:00 UTC is already 2023-02-05 in UTC+9.
        let jd = calendar_to_jd(2023, 2, 4.0 + 20.0 / 24.0);
        assert_eq!(
            local_date_from_jd(jd, 0),
            NaiveDate::from_ymd_opt(2023, 2, 4)
        );
        assert_eq!(
            local_date_from_jd(jd, 540),
            NaiveDate::from_ymd_opt(2023, 2, 5)
        );
    }

    #[test]
    fn centuries_zero_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }
}
