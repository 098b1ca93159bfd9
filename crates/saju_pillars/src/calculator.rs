//! Four-pillar computation from an instant with an explicit UTC offset.

use std::sync::Arc;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc,
};
use saju_calendar::{
    CalendarError, LunarCalendar, LunarDate, SolarTermCache, SolarTermMoment, SolarTermSource,
    SolarTermTable,
};
use saju_cycle::{FourPillars, JIA_ZI, Pillar, Stem};
use saju_time::{Epoch, SECONDS_PER_DAY};
use tracing::debug;

use crate::error::SajuError;
use crate::options::{CalculationOptions, MonthPillarConvention, ZiHourConvention};

/// Earliest civil date (UTC) with a full set of neighbouring tables.
pub const MIN_SUPPORTED_DATE: (i32, u32, u32) = (1801, 1, 1);
/// Latest civil date (UTC) with a full set of neighbouring tables.
pub const MAX_SUPPORTED_DATE: (i32, u32, u32) = (2199, 12, 31);

/// Sexagenary year counting starts from 1984, a 甲子 year.
const JIA_ZI_YEAR: i32 = 1984;

/// Pillars plus the context they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarReading {
    pub pillars: FourPillars,
    /// Gregorian year whose 立春 opened the current sexagenary year.
    pub sexagenary_year: i32,
    /// The Jie term governing the solar month.
    pub month_term: SolarTermMoment,
    /// The next Jie term.
    pub next_term: SolarTermMoment,
    /// Wall-clock time used for the day and hour pillars.
    pub local_datetime: NaiveDateTime,
    /// Lunar date of the instant; present under the lunar-month convention.
    pub lunar_date: Option<LunarDate>,
}

/// Computes four pillars from instants, reading solar terms from `S`.
#[derive(Debug, Clone, Default)]
pub struct PillarCalculator<S = SolarTermCache> {
    source: S,
}

impl<S: SolarTermSource> PillarCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Year, month, day and hour pillars of `timestamp`.
    pub fn compute_pillars(
        &self,
        timestamp: &DateTime<FixedOffset>,
        options: &CalculationOptions,
    ) -> Result<FourPillars, SajuError> {
        self.compute_reading(timestamp, options).map(|r| r.pillars)
    }

    /// Pillars together with the sexagenary year, governing terms and
    /// wall-clock time that produced them.
    pub fn compute_reading(
        &self,
        timestamp: &DateTime<FixedOffset>,
        options: &CalculationOptions,
    ) -> Result<PillarReading, SajuError> {
        options.validate()?;
        let utc = timestamp.with_timezone(&Utc);
        check_supported_instant(&utc)?;
        let jd = Epoch::from_datetime(timestamp).as_jd_ut();

        let (sexagenary_year, table) = self.sexagenary_year(utc.year(), jd)?;
        let next_table = self.source.terms_for_year(sexagenary_year + 1)?;
        let month_term = *table
            .last_jie_at_or_before(jd)
            .ok_or(SajuError::Calendar(CalendarError::InvalidTable(
                "instant precedes the table's opening term",
            )))?;
        let next_term = *table
            .next_jie_after(jd)
            .unwrap_or_else(|| next_table.li_chun());
        check_boundary(jd, &month_term, &next_term, options.boundary_tolerance_seconds)?;

        let year = year_pillar(sexagenary_year);
        let (month, lunar_date) = match options.month_convention {
            MonthPillarConvention::SolarTerm => {
                (month_pillar(year.stem(), month_term.term.month_offset()), None)
            }
            MonthPillarConvention::LunarMonth => {
                let calendar = LunarCalendar::new(options.lunar_utc_offset_minutes)?;
                let offset = FixedOffset::east_opt(options.lunar_utc_offset_minutes * 60)
                    .ok_or(SajuError::InvalidOptions("lunar_utc_offset_minutes"))?;
                let civil = timestamp.with_timezone(&offset).date_naive();
                let lunar = calendar.to_lunar(civil, &self.source)?;
                let lunar_year_stem = year_pillar(lunar.year).stem();
                (month_pillar(lunar_year_stem, lunar.month - 1), Some(lunar))
            }
        };

        let local = wall_clock(timestamp, options.local_mean_time_longitude);
        let day_date = match options.zi_hour {
            ZiHourConvention::Early23 if local.hour() == 23 => local.date() + Duration::days(1),
            _ => local.date(),
        };
        let day = day_pillar(day_date, options);
        let hour = hour_pillar(day.stem(), local.hour());

        let pillars = FourPillars::new(year, month, day, hour);
        debug!(
            %timestamp,
            sexagenary_year,
            month_term = month_term.term.name(),
            %pillars,
            "computed pillars"
        );
        Ok(PillarReading {
            pillars,
            sexagenary_year,
            month_term,
            next_term,
            local_datetime: local,
            lunar_date,
        })
    }

    /// The sexagenary year containing `jd` and its solar-term table.
    fn sexagenary_year(
        &self,
        utc_year: i32,
        jd: f64,
    ) -> Result<(i32, Arc<SolarTermTable>), SajuError> {
        let table = self.source.terms_for_year(utc_year)?;
        if jd < table.li_chun().jd_ut {
            Ok((utc_year - 1, self.source.terms_for_year(utc_year - 1)?))
        } else {
            Ok((utc_year, table))
        }
    }
}

fn check_supported_instant(utc: &DateTime<Utc>) -> Result<(), SajuError> {
    let date = utc.date_naive();
    let (min_y, min_m, min_d) = MIN_SUPPORTED_DATE;
    let (max_y, max_m, max_d) = MAX_SUPPORTED_DATE;
    let min = NaiveDate::from_ymd_opt(min_y, min_m, min_d);
    let max = NaiveDate::from_ymd_opt(max_y, max_m, max_d);
    match (min, max) {
        (Some(min), Some(max)) if (min..=max).contains(&date) => Ok(()),
        _ => Err(SajuError::UnsupportedYearRange {
            year: date.year(),
            min: min_y,
            max: max_y,
        }),
    }
}

/// Reject instants strictly within `tolerance` seconds of either
/// surrounding Jie term.
fn check_boundary(
    jd: f64,
    current: &SolarTermMoment,
    next: &SolarTermMoment,
    tolerance: f64,
) -> Result<(), SajuError> {
    if tolerance <= 0.0 {
        return Ok(());
    }
    for term in [current, next] {
        let seconds = (jd - term.jd_ut) * SECONDS_PER_DAY;
        if seconds.abs() < tolerance {
            return Err(SajuError::AmbiguousBoundary {
                term: term.term,
                seconds_from_boundary: seconds,
            });
        }
    }
    Ok(())
}

/// Wall clock of the timestamp, or local mean time at `longitude`.
fn wall_clock(timestamp: &DateTime<FixedOffset>, longitude: Option<f64>) -> NaiveDateTime {
    match longitude {
        // 4 minutes of time per degree.
        Some(lon) => {
            timestamp.naive_utc() + Duration::milliseconds((lon * 240_000.0).round() as i64)
        }
        None => timestamp.naive_local(),
    }
}

/// 甲子 advanced by the years since 1984.
pub fn year_pillar(sexagenary_year: i32) -> Pillar {
    JIA_ZI.advance(i64::from(sexagenary_year - JIA_ZI_YEAR))
}

/// Month pillar by the five-tigers rule (五虎遁).
///
/// The 寅 month of a year with stem `s` has stem `(2s + 2) mod 10`; both
/// stem and branch then advance one step per month, so the pillar is the
/// cycle position `2 + 12·(s mod 5)` advanced by `month_offset`.
pub fn month_pillar(year_stem: Stem, month_offset: u8) -> Pillar {
    let tiger = 2 + 12 * i64::from(year_stem.index() % 5);
    Pillar::from_cycle_index(tiger + i64::from(month_offset))
}

/// Day pillar of a civil date, counted in whole days from the reference epoch.
pub fn day_pillar(date: NaiveDate, options: &CalculationOptions) -> Pillar {
    let epoch = options.reference_epoch;
    let days = (date - epoch.date).num_days();
    epoch.pillar.advance(days)
}

/// Hour pillar by the five-rats rule (五鼠遁).
///
/// Hour slot `((hour + 1) / 2) mod 12`, so 23:00–00:59 is 子. The 子 hour
/// of a day with stem `s` has stem `2s mod 10`, i.e. cycle position
/// `12·(s mod 5)`, advanced by the slot.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let slot = i64::from((hour + 1) / 2 % 12);
    let rat = 12 * i64::from(day_stem.index() % 5);
    Pillar::from_cycle_index(rat + slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_cycle::Branch;

    #[test]
    fn five_tigers_matches_stem_formula() {
        for s in 0..10u8 {
            let stem = Stem::from_index(s);
            for m in 0..12u8 {
                let p = month_pillar(stem, m);
                assert_eq!(p.stem().index(), (s * 2 + 2 + m) % 10);
                assert_eq!(p.branch(), Branch::Yin.advance(i64::from(m)));
            }
        }
        assert_eq!(month_pillar(Stem::Jia, 0).to_string(), "丙寅");
        assert_eq!(month_pillar(Stem::Gui, 0).to_string(), "甲寅");
    }

    #[test]
    fn five_rats_matches_stem_formula() {
        for s in 0..10u8 {
            for hour in 0..24u32 {
                let p = hour_pillar(Stem::from_index(s), hour);
                let slot = ((hour + 1) / 2 % 12) as u8;
                assert_eq!(p.stem().index(), (s * 2 + slot) % 10);
                assert_eq!(p.branch().index(), slot);
            }
        }
        assert_eq!(hour_pillar(Stem::Jia, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Jia, 23).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Jia, 1).to_string(), "乙丑");
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984).to_string(), "甲子");
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
        assert_eq!(year_pillar(1983).to_string(), "癸亥");
    }

    #[test]
    fn day_pillar_from_epoch() {
        let opts = CalculationOptions::default();
        let date = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        assert_eq!(day_pillar(date, &opts).to_string(), "丙午");
        let before = NaiveDate::from_ymd_opt(2023, 9, 30).unwrap();
        assert_eq!(day_pillar(before, &opts).to_string(), "辛卯");
    }

    #[test]
    fn lmt_shifts_wall_clock() {
        let ts = DateTime::parse_from_rfc3339("2023-10-03T00:20:00+09:00").unwrap();
        let lmt = wall_clock(&ts, Some(135.0));
        assert_eq!(lmt, ts.naive_local());
        let seoul = wall_clock(&ts, Some(127.0));
        assert_eq!(seoul.to_string(), "2023-10-02 23:48:00");
    }

    #[test]
    fn supported_instants() {
        let ok = DateTime::parse_from_rfc3339("1801-01-01T00:00:00Z").unwrap();
        assert!(check_supported_instant(&ok.with_timezone(&Utc)).is_ok());
        let late = DateTime::parse_from_rfc3339("2200-01-01T00:00:00Z").unwrap();
        assert!(matches!(
            check_supported_instant(&late.with_timezone(&Utc)),
            Err(SajuError::UnsupportedYearRange { year: 2200, .. })
        ));
    }
}
