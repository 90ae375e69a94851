use std::{hint::black_box, thread};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use value_cell::{AtomicCell, PlainCell};

const OPS_PER_THREAD: u64 = 10_000;

fn increment_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment/single");

    group.bench_function("PlainCell", |b| {
        let cell = PlainCell::new(0u64);
        b.iter(|| black_box(cell.increment()))
    });

    group.bench_function("AtomicCell", |b| {
        let cell = AtomicCell::new(0u64);
        b.iter(|| black_box(cell.increment()))
    });

    group.finish();
}

fn increment_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment/contended");

    for threads in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("fetch_add", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let cell = AtomicCell::new(0u64);
                    thread::scope(|s| {
                        for _ in 0..threads {
                            s.spawn(|| {
                                for _ in 0..OPS_PER_THREAD {
                                    cell.increment();
                                }
                            });
                        }
                    });
                    black_box(cell.get())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("cas_loop", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let cell = AtomicCell::new(0u64);
                    thread::scope(|s| {
                        for _ in 0..threads {
                            s.spawn(|| {
                                for _ in 0..OPS_PER_THREAD {
                                    let mut current = cell.get();
                                    while !cell.compare_and_swap(current, current + 1) {
                                        current = cell.get();
                                    }
                                }
                            });
                        }
                    });
                    black_box(cell.get())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, increment_uncontended, increment_contended);
criterion_main!(benches);
