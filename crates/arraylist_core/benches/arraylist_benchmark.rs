//! # Array List Benchmark
//!
//! Measures:
//! 1. Tail append (amortized O(1), includes reallocations)
//! 2. Front insert (O(n) shift per call)
//! 3. Front remove (O(n) shift per call)
//! 4. Indexed read

#![allow(missing_docs)]

use arraylist_core::ArrayList;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn filled(count: usize) -> ArrayList<u64> {
    let mut list = ArrayList::create().unwrap();
    list.reserve(count).unwrap();
    for i in 0..count {
        list.add_last(i as u64).unwrap();
    }
    list
}

/// Benchmark appending from an empty list, growth included
fn bench_add_last(c: &mut Criterion) {
    let mut group = c.benchmark_group("arraylist_add_last");

    for count in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut list = ArrayList::create().unwrap();
                for i in 0..count {
                    list.add_last(black_box(i)).unwrap();
                }
                list
            });
        });
    }

    group.finish();
}

/// Benchmark inserting at index 0
fn bench_add_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("arraylist_add_first");

    for count in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut list = ArrayList::create().unwrap();
                for i in 0..count {
                    list.add_first(black_box(i)).unwrap();
                }
                list
            });
        });
    }

    group.finish();
}

/// Benchmark draining from the front
fn bench_remove_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("arraylist_remove_first");

    for count in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || filled(count),
                |mut list| {
                    while let Ok(value) = list.remove_first() {
                        black_box(value);
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark sequential indexed reads
fn bench_get(c: &mut Criterion) {
    let list = filled(100_000);

    c.bench_function("arraylist_get_sequential", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..list.len() {
                sum = sum.wrapping_add(*list.get(black_box(i)).unwrap());
            }
            sum
        });
    });
}

criterion_group!(
    benches,
    bench_add_last,
    bench_add_first,
    bench_remove_first,
    bench_get
);
criterion_main!(benches);
