use chrono::{FixedOffset, NaiveDate, NaiveTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_calendar::SolarTermCache;
use saju_pillars::{CalculationOptions, PillarCalculator, timestamp_from_str};

fn compute_bench(c: &mut Criterion) {
    let calc = PillarCalculator::new(SolarTermCache::new());
    let opts = CalculationOptions::default();
    let ts = timestamp_from_str("2023-10-15T10:00:00+09:00").expect("valid timestamp");
    calc.compute_pillars(&ts, &opts).expect("warm cache");

    let mut group = c.benchmark_group("pillars");
    group.bench_function("compute_pillars_cached", |b| {
        b.iter(|| {
            calc.compute_pillars(black_box(&ts), black_box(&opts))
                .expect("pillars should compute")
        })
    });
    group.finish();
}

fn batch_bench(c: &mut Criterion) {
    let calc = PillarCalculator::new(SolarTermCache::new());
    let opts = CalculationOptions::default();
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2009, 12, 31).expect("valid date");
    let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
    let kst = FixedOffset::east_opt(9 * 3600).expect("valid offset");

    let mut group = c.benchmark_group("pillars_batch");
    group.sample_size(10);
    group.bench_function("ten_years_of_days", |b| {
        b.iter(|| {
            calc.pillars_for_days(start, end, noon, kst, &opts)
                .expect("batch should compute")
        })
    });
    group.finish();
}

criterion_group!(benches, compute_bench, batch_bench);
criterion_main!(benches);
