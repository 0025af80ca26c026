use std::hint::black_box;
use std::time::Duration;

use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use ui_pace::Throttle;
use ui_pace::throttle;

fn bench_gate_suppressed(c: &mut Criterion) {
    c.bench_function("gate_suppressed", |b| {
        let gate = Throttle::new(Duration::from_secs(3600));
        gate.try_pass();

        // Hot path of a scroll handler: every call lands inside the window
        b.iter(|| black_box(gate.try_pass()));
    });
}

fn bench_gate_open(c: &mut Criterion) {
    c.bench_function("gate_open", |b| {
        let gate = Throttle::new(Duration::from_nanos(1));

        // Every call finds the previous window expired and claims a new one
        b.iter(|| black_box(gate.try_pass()));
    });
}

fn bench_throttled_callback(c: &mut Criterion) {
    c.bench_function("throttled_callback", |b| {
        let mut total = 0u64;
        let mut limited = throttle(|offset: u64| total = total.wrapping_add(offset), Duration::from_secs(3600));
        limited(1);

        b.iter(|| limited(black_box(42)));
    });
}

criterion_group!(benches, bench_gate_suppressed, bench_gate_open, bench_throttled_callback);
criterion_main!(benches);
