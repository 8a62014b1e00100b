//! Benchmark for full LOPA evaluation over growing layer sets.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lopa::core::{Ipl, IplType, Pfd, Severity};
use lopa::lopa::{evaluate_ipl_set, rrf_by_type, run_analysis_for_severity};
use std::hint::black_box;

const TYPES: [IplType; 7] = [
    IplType::BasicProcessControl,
    IplType::SafetyInstrumentedFunction,
    IplType::ReliefDevice,
    IplType::HumanIntervention,
    IplType::Alarm,
    IplType::PhysicalProtection,
    IplType::Other,
];

fn create_layers(count: usize) -> Vec<Ipl> {
    (0..count)
        .map(|i| {
            let pfd = Pfd::clamped(0.5 / (i as f64 + 1.0));
            let ipl = Ipl::new(
                format!("ipl-{i}"),
                TYPES[i % TYPES.len()],
                format!("Layer {i}"),
                pfd,
            );
            // Every fifth layer shares a cause with the initiator
            ipl.with_independence(i % 5 != 0, true)
        })
        .collect()
}

fn bench_comprehensive_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("comprehensive_analysis");

    for size in [3, 10, 100, 1000] {
        let layers = create_layers(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &layers, |b, layers| {
            b.iter(|| {
                run_analysis_for_severity(black_box(layers), Severity::Major, black_box(0.1))
            });
        });
    }

    group.finish();
}

fn bench_layer_aggregation(c: &mut Criterion) {
    let layers = create_layers(1000);

    c.bench_function("evaluate_ipl_set_1000", |b| {
        b.iter(|| evaluate_ipl_set(black_box(&layers)));
    });

    c.bench_function("rrf_by_type_1000", |b| {
        b.iter(|| rrf_by_type(black_box(&layers)));
    });
}

criterion_group!(benches, bench_comprehensive_analysis, bench_layer_aggregation);
criterion_main!(benches);
