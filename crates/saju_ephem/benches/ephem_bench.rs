use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_ephem::{new_moon_at_or_before, next_longitude_crossing, sun_apparent_longitude};
use saju_time::calendar_to_jd;

fn sun_bench(c: &mut Criterion) {
    let jd = calendar_to_jd(2024, 3, 20.0);

    let mut group = c.benchmark_group("ephem_sun");
    group.bench_function("sun_apparent_longitude", |b| {
        b.iter(|| sun_apparent_longitude(black_box(jd)))
    });
    group.sample_size(20);
    group.bench_function("next_longitude_crossing", |b| {
        b.iter(|| {
            next_longitude_crossing(black_box(315.0), black_box(jd - 50.0), 30)
                .expect("crossing should be found")
        })
    });
    group.finish();
}

fn lunation_bench(c: &mut Criterion) {
    let jd = calendar_to_jd(2024, 1, 20.0);

    let mut group = c.benchmark_group("ephem_lunation");
    group.bench_function("new_moon_at_or_before", |b| {
        b.iter(|| new_moon_at_or_before(black_box(jd)).expect("lunation should bracket"))
    });
    group.finish();
}

criterion_group!(benches, sun_bench, lunation_bench);
criterion_main!(benches);
