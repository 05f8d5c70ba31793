//! Estimator and formatter benchmarks.
//!
//! Run with: `cargo bench --package leadscope-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use leadscope_bench::{roi_scenarios, tam_scenarios};
use leadscope_lib::prelude::*;
use std::hint::black_box;
use std::io::sink;

fn tam_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tam");
    let estimator = TamEstimator::default();

    for (name, config) in tam_scenarios() {
        let labels = config.industries.len() + config.roles.len() + config.company_sizes.len();
        group.throughput(Throughput::Elements(labels as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| estimator.estimate(black_box(config)));
        });
    }

    group.finish();
}

fn roi_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("roi");

    for (name, config) in roi_scenarios() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| calculate_roi(black_box(config)));
        });
    }

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let (_, config) = tam_scenarios().swap_remove(2);
    let result = calculate_tam(&config);
    let report = TamReport::new(config, result);

    group.bench_function("text", |b| {
        b.iter(|| TextFormatter::new().write_tam(black_box(&report), sink()));
    });
    group.bench_function("json", |b| {
        b.iter(|| JsonFormatter::new().write_tam(black_box(&report), sink()));
    });
    group.bench_function("csv", |b| {
        b.iter(|| CsvFormatter::new().write_tam(black_box(&report), sink()));
    });

    group.finish();
}

criterion_group!(benches, tam_benchmark, roi_benchmark, format_benchmark);
criterion_main!(benches);
