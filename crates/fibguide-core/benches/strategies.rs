//! Criterion benchmarks for the Fibonacci strategies.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;

use fibguide_core::calculator::{Calculator, FibCalculator};
use fibguide_core::iterative::IterativeFibonacci;
use fibguide_core::matrix::MatrixFibonacci;
use fibguide_core::memo::{fibonacci_memo, MemoCache};
use fibguide_core::recursive::RecursiveFibonacci;
use fibguide_core::{fibonacci_mod, sequence_prefix};

fn bench_recursive(c: &mut Criterion) {
    let recursive = FibCalculator::new(Arc::new(RecursiveFibonacci::new()));

    let mut group = c.benchmark_group("Recursive");
    for n in [10i64, 20, 25] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| recursive.calculate(n).unwrap());
        });
    }
    group.finish();
}

fn bench_linear_and_log(c: &mut Criterion) {
    let iterative: Arc<dyn Calculator> =
        Arc::new(FibCalculator::new(Arc::new(IterativeFibonacci::new())));
    let matrix: Arc<dyn Calculator> =
        Arc::new(FibCalculator::new(Arc::new(MatrixFibonacci::new())));

    let ns = [100i64, 1_000, 10_000];

    for calc in [&iterative, &matrix] {
        let mut group = c.benchmark_group(calc.name().to_string());
        for &n in &ns {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter(|| calc.calculate(n).unwrap());
            });
        }
        group.finish();
    }

    // A fresh cache per iteration measures the cold fill, not the lookup.
    let mut group = c.benchmark_group("MemoizedCold");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci_memo(n, &mut MemoCache::new()).unwrap());
        });
    }
    group.finish();
}

fn bench_helpers(c: &mut Criterion) {
    let modulus = BigUint::from(1_000_000_007u64);
    c.bench_function("fibonacci_mod/1e6", |b| {
        b.iter(|| fibonacci_mod(1_000_000, &modulus).unwrap());
    });
    c.bench_function("sequence_prefix/1000", |b| {
        b.iter(|| sequence_prefix(1000).unwrap());
    });
}

criterion_group!(benches, bench_recursive, bench_linear_and_log, bench_helpers);
criterion_main!(benches);
