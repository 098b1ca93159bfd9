//! Lunisolar (Korean/Chinese) calendar conversion.
//!
//! Months start on the civil date, at the calendar's reference meridian,
//! of a true new moon. The month holding the winter solstice is month 11.
//! When 13 months start between two consecutive month-11 starts, the
//! first of them without a Qi (中氣) term is intercalary and repeats the
//! number of the month before it. Months 11 and 12 belong to the lunar
//! year that precedes month 1.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use saju_ephem::{new_moon_at_or_before, new_moon_ut};
use saju_time::{TimeError, date_to_jdn, local_date_from_jd};
use tracing::trace;

use crate::cache::SolarTermSource;
use crate::error::CalendarError;
use crate::solar_term::SolarTerm;

/// UTC+9, the Korean standard meridian (135°E).
pub const KOREAN_UTC_OFFSET_MINUTES: i32 = 9 * 60;
/// UTC+8, the Chinese standard meridian (120°E).
pub const CHINESE_UTC_OFFSET_MINUTES: i32 = 8 * 60;
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    /// 1..=12
    pub month: u8,
    /// 1..=30
    pub day: u8,
    pub is_leap_month: bool,
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap_month {
            f.write_str(" (leap)")?;
        }
        Ok(())
    }
}

/// The lunar month containing a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    pub year: i32,
    pub month: u8,
    pub is_leap_month: bool,
    /// Civil date of the opening new moon.
    pub start: NaiveDate,
    /// 29 or 30.
    pub days: u8,
}

/// Converter from civil dates to lunar dates at a fixed reference meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarCalendar {
    utc_offset_minutes: i32,
}

impl Default for LunarCalendar {
    fn default() -> Self {
        Self::korean()
    }
}

impl LunarCalendar {
    /// Calendar reckoned at a UTC offset in minutes (within ±14 h).
    pub fn new(utc_offset_minutes: i32) -> Result<Self, CalendarError> {
        if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(CalendarError::InvalidUtcOffset(utc_offset_minutes));
        }
        Ok(Self { utc_offset_minutes })
    }

    pub const fn korean() -> Self {
        Self {
            utc_offset_minutes: KOREAN_UTC_OFFSET_MINUTES,
        }
    }

    pub const fn chinese() -> Self {
        Self {
            utc_offset_minutes: CHINESE_UTC_OFFSET_MINUTES,
        }
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    /// Lunar date of a civil date.
    pub fn to_lunar(
        &self,
        date: NaiveDate,
        source: &dyn SolarTermSource,
    ) -> Result<LunarDate, CalendarError> {
        let month = self.month_of(date, source)?;
        let day = (date - month.start).num_days() + 1;
        Ok(LunarDate {
            year: month.year,
            month: month.month,
            day: day as u8,
            is_leap_month: month.is_leap_month,
        })
    }

    /// The lunar month containing a civil date.
    pub fn month_of(
        &self,
        date: NaiveDate,
        source: &dyn SolarTermSource,
    ) -> Result<LunarMonth, CalendarError> {
        let year = date.year();
        let (k_this, start_this) = self.month11_start(year, source)?;
        let (base, k_a, k_b) = if date >= start_this {
            (year, k_this, self.month11_start(year + 1, source)?.0)
        } else {
            (year - 1, self.month11_start(year - 1, source)?.0, k_this)
        };
        let leap = self.leap_lunation(base, k_a, k_b, source)?;

        let (k, start) = self.lunation_on_or_before(date)?;
        let next_start = self.local_date(new_moon_ut(k + 1))?;
        let count = k - k_a - i64::from(leap.is_some_and(|l| l <= k));
        let month = ((10 + count).rem_euclid(12) + 1) as u8;
        let lunar_year = if count <= 1 { base } else { base + 1 };
        trace!(%date, base, k, ?leap, month, "lunar month resolved");

        Ok(LunarMonth {
            year: lunar_year,
            month,
            is_leap_month: leap == Some(k),
            start,
            days: (next_start - start).num_days() as u8,
        })
    }

    /// The leap lunation between two month-11 starts, if there is one.
    pub fn leap_month_in(
        &self,
        year: i32,
        source: &dyn SolarTermSource,
    ) -> Result<Option<LunarMonth>, CalendarError> {
        let (k_a, _) = self.month11_start(year - 1, source)?;
        let (k_b, _) = self.month11_start(year, source)?;
        match self.leap_lunation(year - 1, k_a, k_b, source)? {
            Some(k) => {
                let start = self.local_date(new_moon_ut(k))?;
                self.month_of(start, source).map(Some)
            }
            None => Ok(None),
        }
    }

    fn local_date(&self, jd_ut: f64) -> Result<NaiveDate, CalendarError> {
        local_date_from_jd(jd_ut, self.utc_offset_minutes)
            .ok_or(CalendarError::Time(TimeError::OutOfRange { jd: jd_ut }))
    }

    /// The last lunation whose local start date is on or before `date`.
    fn lunation_on_or_before(&self, date: NaiveDate) -> Result<(i64, NaiveDate), CalendarError> {
        let next_midnight =
            date_to_jdn(date) as f64 + 0.5 - self.utc_offset_minutes as f64 / 1440.0;
        let (mut k, nm) = new_moon_at_or_before(next_midnight)?;
        let mut start = self.local_date(nm)?;
        if start > date {
            k -= 1;
            start = self.local_date(new_moon_ut(k))?;
        }
        Ok((k, start))
    }

    /// Lunation that opens month 11 around `year`'s winter solstice.
    fn month11_start(
        &self,
        year: i32,
        source: &dyn SolarTermSource,
    ) -> Result<(i64, NaiveDate), CalendarError> {
        let table = source.terms_for_year(year)?;
        let solstice = self.local_date(table.moment(SolarTerm::DongZhi).jd_ut)?;
        self.lunation_on_or_before(solstice)
    }

    fn leap_lunation(
        &self,
        base: i32,
        k_a: i64,
        k_b: i64,
        source: &dyn SolarTermSource,
    ) -> Result<Option<i64>, CalendarError> {
        if k_b - k_a != 13 {
            return Ok(None);
        }
        let this = source.terms_for_year(base)?;
        let next = source.terms_for_year(base + 1)?;
        let qi_dates = [SolarTerm::DongZhi, SolarTerm::DaHan]
            .iter()
            .map(|t| this.moment(*t).jd_ut)
            .chain(next.qi_terms().map(|m| m.jd_ut))
            .map(|jd| self.local_date(jd))
            .collect::<Result<Vec<_>, _>>()?;

        let mut start = self.local_date(new_moon_ut(k_a))?;
        for k in k_a..k_b {
            let end = self.local_date(new_moon_ut(k + 1))?;
            if !qi_dates.iter().any(|q| start <= *q && *q < end) {
                return Ok(Some(k));
            }
            start = end;
        }
        Err(CalendarError::NoConvergence(
            "13-month span without a month lacking a mid-term",
        ))
    }
}
