//! Benchmark for mutable vs persistent sequence edits.
//!
//! Compares `ArraySequence` and `ListSequence` against each other and
//! against the standard `Vec` for the edge edits both variants support.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqkit::prelude::*;
use std::hint::black_box;

// =============================================================================
// Mutable append / prepend
// =============================================================================

fn benchmark_append_mut(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("append_mut");

    for size in [100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("ArraySequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence = ArraySequence::new();
                    for index in 0..size {
                        sequence.append_mut(black_box(index));
                    }
                    black_box(sequence)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ListSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence = ListSequence::new();
                    for index in 0..size {
                        sequence.append_mut(black_box(index));
                    }
                    black_box(sequence)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

fn benchmark_prepend_mut(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prepend_mut");

    for size in [100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("ArraySequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence = ArraySequence::new();
                    for index in 0..size {
                        sequence.prepend_mut(black_box(index));
                    }
                    black_box(sequence)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ListSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence = ListSequence::new();
                    for index in 0..size {
                        sequence.prepend_mut(black_box(index));
                    }
                    black_box(sequence)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Persistent append
// =============================================================================

fn benchmark_persistent_append(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("persistent_append");

    for size in [100, 1000, 10000] {
        let items: Vec<i32> = (0..size).collect();
        let array = ArraySequence::from_slice(&items);
        let list = ListSequence::from_slice(&items);

        group.bench_with_input(BenchmarkId::new("ArraySequence", size), &size, |bencher, _| {
            bencher.iter(|| black_box(array.append(black_box(-1))));
        });

        group.bench_with_input(BenchmarkId::new("ListSequence", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.append(black_box(-1))));
        });
    }

    group.finish();
}

// =============================================================================
// Concat
// =============================================================================

fn benchmark_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("concat");

    for size in [100, 1000] {
        let items: Vec<i32> = (0..size).collect();
        let array = ArraySequence::from_slice(&items);
        let list = ListSequence::from_slice(&items);

        group.bench_with_input(BenchmarkId::new("array_with_array", size), &size, |bencher, _| {
            bencher.iter(|| black_box(array.concat(&array).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("list_with_array", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.concat(&array).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_append_mut,
    benchmark_prepend_mut,
    benchmark_persistent_append,
    benchmark_concat
);
criterion_main!(benches);
