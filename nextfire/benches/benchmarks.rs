use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use nextfire::{clock, resolve, Tab, TabEntry};

// ---------------------------------------------------------------------------
// Reference-time benchmarks
// ---------------------------------------------------------------------------

fn bench_clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");

    group.bench_function("parse", |b| {
        b.iter(|| clock::parse(black_box("16:10")).unwrap());
    });

    group.bench_function("parse_wraparound", |b| {
        b.iter(|| clock::parse(black_box("23:60")).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Table benchmarks
// ---------------------------------------------------------------------------

fn bench_tab(c: &mut Criterion) {
    let mut group = c.benchmark_group("tab");

    let small = "30 1 /bin/run_me_daily\n45 * /bin/run_me_hourly\n* * /bin/tick\n* 19 /bin/report\n";
    group.bench_function("parse_small", |b| {
        b.iter(|| Tab::parse(black_box(small)));
    });

    let large: String = (0..1000)
        .map(|i| format!("{} {} job{i}\n", i % 60, i % 24))
        .collect();
    group.bench_function("parse_thousand_lines", |b| {
        b.iter(|| Tab::parse(black_box(&large)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Resolution benchmarks
// ---------------------------------------------------------------------------

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    // The pass consumes its entries, so each iteration gets a fresh clone
    // via the setup closure to keep the allocation out of the measurement.
    let small = Tab::parse("30 1 /bin/run_me_daily\n45 * /bin/run_me_hourly\n* * /bin/tick\n");
    group.bench_function("small_tab", |b| {
        b.iter_batched(
            || small.entries.clone(),
            |entries| resolve::resolve(black_box("16:10"), entries).unwrap(),
            BatchSize::SmallInput,
        );
    });

    let thousand: Vec<TabEntry> = (0..1000)
        .map(|i| TabEntry::new((i % 60).to_string(), (i % 24).to_string(), format!("job{i}")))
        .collect();
    group.bench_function("thousand_jobs", |b| {
        b.iter_batched(
            || thousand.clone(),
            |entries| resolve::resolve(black_box("16:10"), entries).unwrap(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_clock, bench_tab, bench_resolve);
criterion_main!(benches);
