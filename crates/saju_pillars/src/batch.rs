//! Pillars for a range of civil days, computed in parallel.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use rayon::prelude::*;
use saju_calendar::SolarTermSource;
use saju_cycle::FourPillars;
use tracing::debug;

use crate::calculator::PillarCalculator;
use crate::error::SajuError;
use crate::options::CalculationOptions;

/// Upper bound on the number of days in one batch (about 400 years).
pub const MAX_BATCH_DAYS: i64 = 146_097;

impl<S: SolarTermSource> PillarCalculator<S> {
    /// Pillars at wall-clock `time` (at `offset`) for every civil day from
    /// `start` to `end` inclusive, in date order.
    pub fn pillars_for_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        time: NaiveTime,
        offset: FixedOffset,
        options: &CalculationOptions,
    ) -> Result<Vec<(NaiveDate, FourPillars)>, SajuError> {
        options.validate()?;
        let span = (end - start).num_days();
        if span < 0 {
            return Err(SajuError::InvalidOptions("end date precedes start date"));
        }
        if span >= MAX_BATCH_DAYS {
            return Err(SajuError::InvalidOptions("day range too long"));
        }
        debug!(%start, %end, days = span + 1, "batch pillar computation");

        let dates: Vec<NaiveDate> = (0..=span).map(|i| start + Duration::days(i)).collect();
        dates
            .par_iter()
            .map(|date| -> Result<(NaiveDate, FourPillars), SajuError> {
                let ts = local_timestamp(*date, time, offset)?;
                Ok((*date, self.compute_pillars(&ts, options)?))
            })
            .collect()
    }
}

fn local_timestamp(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, SajuError> {
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| SajuError::InvalidTimestamp(format!("{date} {time} at {offset}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_calendar::SolarTermCache;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn consecutive_days_advance_by_one() {
        let calc = PillarCalculator::new(SolarTermCache::new());
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let days = calc
            .pillars_for_days(
                ymd(2023, 10, 1),
                ymd(2023, 10, 20),
                noon,
                kst,
                &CalculationOptions::default(),
            )
            .unwrap();
        assert_eq!(days.len(), 20);
        for w in days.windows(2) {
            assert_eq!(w[1].1.day(), w[0].1.day().advance(1));
            assert_eq!(w[1].0, w[0].0 + Duration::days(1));
        }
        assert_eq!(days[14].1.day().to_string(), "丙午");
    }

    #[test]
    fn reversed_range_rejected() {
        let calc = PillarCalculator::new(SolarTermCache::new());
        let r = calc.pillars_for_days(
            ymd(2023, 10, 2),
            ymd(2023, 10, 1),
            NaiveTime::MIN,
            FixedOffset::east_opt(0).unwrap(),
            &CalculationOptions::default(),
        );
        assert!(matches!(r, Err(SajuError::InvalidOptions(_))));
    }

    #[test]
    fn out_of_range_day_fails_whole_batch() {
        let calc = PillarCalculator::new(SolarTermCache::new());
        let r = calc.pillars_for_days(
            ymd(2199, 12, 30),
            ymd(2200, 1, 2),
            NaiveTime::MIN,
            FixedOffset::east_opt(0).unwrap(),
            &CalculationOptions::default(),
        );
        assert!(matches!(r, Err(SajuError::UnsupportedYearRange { .. })));
    }
}
