//! Per-year solar-term tables and their astronomical computation.

use chrono::{DateTime, Utc};
use saju_ephem::{check_supported_year, next_longitude_crossing};
use saju_time::{Epoch, calendar_to_jd};
use tracing::debug;

use crate::error::CalendarError;
use crate::solar_term::{ALL_SOLAR_TERMS, SolarTerm};

/// Scan start for 立春, a few days before its earliest date.
const LI_CHUN_SCAN_START: (u32, f64) = (1, 30.0);
/// Days scanned for 立春 from the scan start.
const LI_CHUN_SCAN_DAYS: usize = 10;
/// Shortest gap between consecutive terms is ~14.7 d, longest ~15.8 d.
const MIN_TERM_GAP_DAYS: f64 = 13.0;
const TERM_SCAN_DAYS: usize = 5;

/// The instant of one solar term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermMoment {
    pub term: SolarTerm,
    /// Julian Date (UT).
    pub jd_ut: f64,
    pub utc: DateTime<Utc>,
}

impl SolarTermMoment {
    pub fn new(term: SolarTerm, jd_ut: f64) -> Result<Self, CalendarError> {
        let utc = Epoch::from_jd_ut(jd_ut).to_utc()?;
        Ok(Self { term, jd_ut, utc })
    }

    pub fn epoch(&self) -> Epoch {
        Epoch::from_jd_ut(self.jd_ut)
    }
}

/// The 24 solar terms of one sexagenary year, from that year's 立春 to
/// 大寒 of the following January.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTermTable {
    year: i32,
    moments: [SolarTermMoment; 24],
}

impl SolarTermTable {
    /// Build a table from 24 instants (JD UT) in ordinal order.
    ///
    /// The instants must be finite and strictly increasing.
    pub fn new(year: i32, jd_ut: [f64; 24]) -> Result<Self, CalendarError> {
        if jd_ut.iter().any(|jd| !jd.is_finite()) {
            return Err(CalendarError::InvalidTable("non-finite moment"));
        }
        if jd_ut.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CalendarError::InvalidTable("moments not strictly increasing"));
        }
        let mut moments = [SolarTermMoment::new(SolarTerm::LiChun, jd_ut[0])?; 24];
        for (slot, (term, jd)) in moments.iter_mut().zip(ALL_SOLAR_TERMS.iter().zip(jd_ut)) {
            *slot = SolarTermMoment::new(*term, jd)?;
        }
        Ok(Self { year, moments })
    }

    /// The sexagenary year whose 立春 opens this table.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn moments(&self) -> &[SolarTermMoment; 24] {
        &self.moments
    }

    pub fn moment(&self, term: SolarTerm) -> &SolarTermMoment {
        &self.moments[term.index() as usize]
    }

    pub fn li_chun(&self) -> &SolarTermMoment {
        self.moment(SolarTerm::LiChun)
    }

    /// The latest Jie term at or before `jd_ut`, or `None` if `jd_ut`
    /// precedes this table's 立春.
    pub fn last_jie_at_or_before(&self, jd_ut: f64) -> Option<&SolarTermMoment> {
        self.moments
            .iter()
            .filter(|m| m.term.is_jie())
            .take_while(|m| m.jd_ut <= jd_ut)
            .last()
    }

    /// The first Jie term strictly after `jd_ut`, or `None` past 小寒.
    pub fn next_jie_after(&self, jd_ut: f64) -> Option<&SolarTermMoment> {
        self.moments
            .iter()
            .filter(|m| m.term.is_jie())
            .find(|m| m.jd_ut > jd_ut)
    }

    /// The 12 Qi (中氣) terms in order.
    pub fn qi_terms(&self) -> impl Iterator<Item = &SolarTermMoment> {
        self.moments.iter().filter(|m| m.term.is_qi())
    }

    /// The Jie term nearest to `jd_ut` and its signed distance in seconds
    /// (positive when `jd_ut` is after the term).
    pub fn nearest_jie(&self, jd_ut: f64) -> (&SolarTermMoment, f64) {
        let mut best = self.li_chun();
        for m in self.moments.iter().filter(|m| m.term.is_jie()) {
            if (m.jd_ut - jd_ut).abs() < (best.jd_ut - jd_ut).abs() {
                best = m;
            }
        }
        (best, (jd_ut - best.jd_ut) * saju_time::SECONDS_PER_DAY)
    }
}

/// Compute the 24 solar-term instants opening at `year`'s 立春.
///
/// Each term is the instant the apparent solar longitude reaches its
/// target, found by a 1-day scan and bisection starting a safe margin
/// after the previous term.
pub fn solar_terms_for_year(year: i32) -> Result<SolarTermTable, CalendarError> {
    check_supported_year(year)?;
    let (month, day) = LI_CHUN_SCAN_START;
    let mut from = calendar_to_jd(year, month, day);
    let mut jds = [0.0; 24];
    for (slot, term) in jds.iter_mut().zip(ALL_SOLAR_TERMS) {
        let max_days = if term == SolarTerm::LiChun {
            LI_CHUN_SCAN_DAYS
        } else {
            TERM_SCAN_DAYS
        };
        let jd = next_longitude_crossing(term.longitude_deg(), from, max_days)?;
        *slot = jd;
        from = jd + MIN_TERM_GAP_DAYS;
    }
    debug!(year, li_chun_jd = jds[0], "computed solar-term table");
    SolarTermTable::new(year, jds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn table_2024_is_ordered_and_spaced() {
        let table = solar_terms_for_year(2024).unwrap();
        for w in table.moments().windows(2) {
            let gap = w[1].jd_ut - w[0].jd_ut;
            assert!(gap > 14.5 && gap < 16.0, "{:?} gap {gap}", w[1].term);
        }
        assert_eq!(table.year(), 2024);
    }

    #[test]
    fn li_chun_2024() {
        // 立春 2024-02-04 08:27 UTC
        let table = solar_terms_for_year(2024).unwrap();
        let lc = table.li_chun().utc;
        assert_eq!((lc.month(), lc.day(), lc.hour()), (2, 4, 8));
        let expected = calendar_to_jd(2024, 2, 4.0 + (8.0 + 27.0 / 60.0) / 24.0);
        assert!((table.li_chun().jd_ut - expected).abs() * 24.0 < 0.5);
    }

    #[test]
    fn li_chun_2023_is_early_utc() {
        // 立春 2023-02-04 02:42 UTC
        let table = solar_terms_for_year(2023).unwrap();
        let expected = calendar_to_jd(2023, 2, 4.0 + (2.0 + 42.0 / 60.0) / 24.0);
        assert!((table.li_chun().jd_ut - expected).abs() * 24.0 < 0.5);
    }

    #[test]
    fn winter_solstice_2023() {
        // 冬至 2023-12-22 03:27 UTC
        let table = solar_terms_for_year(2023).unwrap();
        let dz = table.moment(SolarTerm::DongZhi);
        let expected = calendar_to_jd(2023, 12, 22.0 + (3.0 + 27.0 / 60.0) / 24.0);
        assert!((dz.jd_ut - expected).abs() * 24.0 < 0.5);
        assert_eq!(table.moment(SolarTerm::DaHan).utc.year(), 2024);
    }

    #[test]
    fn range_edges() {
        assert!(solar_terms_for_year(1800).is_ok());
        assert!(solar_terms_for_year(2200).is_ok());
        assert_eq!(
            solar_terms_for_year(1799).unwrap_err(),
            CalendarError::UnsupportedYearRange {
                year: 1799,
                min: 1800,
                max: 2200
            }
        );
        assert!(solar_terms_for_year(2201).is_err());
    }

    #[test]
    fn jie_queries() {
        let table = solar_terms_for_year(2024).unwrap();
        let lc = table.li_chun().jd_ut;
        assert!(table.last_jie_at_or_before(lc - 1e-6).is_none());
        assert_eq!(table.last_jie_at_or_before(lc).unwrap().term, SolarTerm::LiChun);
        assert_eq!(table.next_jie_after(lc).unwrap().term, SolarTerm::JingZhe);
        let xh = table.moment(SolarTerm::XiaoHan).jd_ut;
        assert_eq!(table.last_jie_at_or_before(xh + 20.0).unwrap().term, SolarTerm::XiaoHan);
        assert!(table.next_jie_after(xh).is_none());
        assert_eq!(table.qi_terms().count(), 12);
    }

    #[test]
    fn nearest_jie_sign() {
        let table = solar_terms_for_year(2024).unwrap();
        let jz = table.moment(SolarTerm::JingZhe).jd_ut;
        let (m, secs) = table.nearest_jie(jz - 10.0 / 86_400.0);
        assert_eq!(m.term, SolarTerm::JingZhe);
        assert!((secs + 10.0).abs() < 1e-3);
    }

    #[test]
    fn rejects_unordered_moments() {
        let mut jds = [0.0; 24];
        for (i, jd) in jds.iter_mut().enumerate() {
            *jd = 2_460_000.0 + 15.0 * i as f64;
        }
        jds[5] = jds[4];
        assert!(matches!(
            SolarTermTable::new(2023, jds),
            Err(CalendarError::InvalidTable(_))
        ));
        jds[5] = f64::NAN;
        assert!(SolarTermTable::new(2023, jds).is_err());
    }
}
