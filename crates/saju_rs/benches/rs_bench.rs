use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_rs::{SajuConfig, init, profile, timestamp_from_str};

fn profile_bench(c: &mut Criterion) {
    init(SajuConfig::default()).expect("engine init");
    let ts = timestamp_from_str("2023-10-15T12:00:00+09:00").expect("valid timestamp");
    profile(&ts).expect("warm cache");

    let mut group = c.benchmark_group("saju_rs");
    group.sample_size(20);
    group.bench_function("profile_cached", |b| {
        b.iter(|| profile(black_box(&ts)).expect("profile should build"))
    });
    group.bench_function("profile_to_json", |b| {
        let p = profile(&ts).expect("profile should build");
        b.iter(|| black_box(&p).to_json().expect("record should serialize"))
    });
    group.finish();
}

criterion_group!(benches, profile_bench);
criterion_main!(benches);
