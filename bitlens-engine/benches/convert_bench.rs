//! Engine benchmarks.
//!
//! Benchmarks the three boundary operations over representative inputs.
//! Run with: cargo bench -p bitlens-engine --bench convert_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bitlens_engine::{convert_radix, decompose_float, simulate_operation};

fn radix_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_radix");
    for input in ["0", "42", "-2147483648"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| convert_radix(input));
        });
    }
    group.finish();
}

fn float_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_float");
    for input in ["1.0", "-2.5", "3.14159265"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| decompose_float(input));
        });
    }
    group.finish();
}

fn operation_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_operation");

    group.bench_function("add_full_trace", |b| {
        b.iter(|| simulate_operation("add", "123456789", Some("-987654321")));
    });
    group.bench_function("subtract_full_trace", |b| {
        b.iter(|| simulate_operation("subtract", "5", Some("3")));
    });
    group.bench_function("shift_right_31", |b| {
        b.iter(|| simulate_operation("shift_right", "-2147483648", Some("31")));
    });

    group.finish();
}

criterion_group!(benches, radix_conversion, float_decomposition, operation_simulation);
criterion_main!(benches);
