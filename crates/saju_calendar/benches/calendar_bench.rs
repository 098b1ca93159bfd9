use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_calendar::{LunarCalendar, SolarTermCache, SolarTermSource, solar_terms_for_year};

fn solar_term_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_solar_terms");
    group.sample_size(20);
    group.bench_function("solar_terms_for_year", |b| {
        b.iter(|| solar_terms_for_year(black_box(2024)).expect("table should compute"))
    });
    let cache = SolarTermCache::new();
    group.bench_function("cached_terms_for_year", |b| {
        b.iter(|| cache.terms_for_year(black_box(2024)).expect("table should compute"))
    });
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let cache = SolarTermCache::new();
    let calendar = LunarCalendar::korean();
    let date = NaiveDate::from_ymd_opt(2023, 9, 29).expect("valid date");

    let mut group = c.benchmark_group("calendar_lunar");
    group.bench_function("to_lunar", |b| {
        b.iter(|| {
            calendar
                .to_lunar(black_box(date), &cache)
                .expect("conversion should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, solar_term_bench, lunar_bench);
criterion_main!(benches);
