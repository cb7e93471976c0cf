//! Benchmarks for delta computation.
//!
//! Run with: cargo bench --bench delta_benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use paddock_delta::compute_delta;
use paddock_test_helpers::fixtures::LapFixture;

fn grid_of_drivers(drivers: usize) -> Vec<paddock_telemetry::DriverLapRecord> {
    (0..drivers)
        .map(|i| {
            let slow = i as f64 * 0.05;
            LapFixture::new(&format!("D{i:02}"), 28.0 + slow, 55.0 + slow * 2.0, 80.0 + slow * 3.0)
                .lap_length(5_300.0)
                .samples(700)
                .build()
        })
        .collect()
}

fn bench_compute_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_delta");
    for drivers in [2usize, 5, 20] {
        let records = grid_of_drivers(drivers);
        group.bench_with_input(BenchmarkId::from_parameter(drivers), &records, |b, records| {
            b.iter(|| std::hint::black_box(compute_delta(std::hint::black_box(records))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_delta);
criterion_main!(benches);
