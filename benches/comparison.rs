use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packed_intset::{
    AnySet, Dense64, FixedSet, GrowableSet, IntSet, Reserved15, Reserved63, SetAlgebra,
};
use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, Mutex};
use std::thread;

/// Benchmark insert operation with clustered keys
fn bench_insert_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_clustered");

    // Clustered data: multiple ranges with gaps
    let clusters = vec![
        (0u64, 1000u64),
        (10_000, 11_000),
        (20_000, 21_000),
        (30_000, 31_000),
    ];

    group.bench_function("GrowableSet", |b| {
        b.iter(|| {
            let set = GrowableSet::<Reserved63>::new();
            for (start, end) in &clusters {
                for i in *start..*end {
                    black_box(set.insert(i));
                }
            }
        });
    });

    group.bench_function("FixedSet", |b| {
        b.iter(|| {
            let set = FixedSet::<Dense64>::new(31_000);
            for (start, end) in &clusters {
                for i in *start..*end {
                    black_box(set.insert(i));
                }
            }
        });
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| {
            let mut btree = BTreeSet::new();
            for (start, end) in &clusters {
                for i in *start..*end {
                    black_box(btree.insert(i));
                }
            }
        });
    });

    group.finish();
}

/// Benchmark ascending iteration over a half-full set
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [1000u64, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("FixedSet", size), size, |b, &size| {
            let set = FixedSet::<Dense64>::new(size);
            set.insert_all((0..size).step_by(2));

            b.iter(|| {
                let mut sum = 0u64;
                set.for_each(|x| sum += x);
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowableSet", size), size, |b, &size| {
            let set = GrowableSet::<Reserved63>::new();
            set.insert_all((0..size).step_by(2));

            b.iter(|| black_box(set.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, &size| {
            let btree: BTreeSet<u64> = (0..size).step_by(2).collect();

            b.iter(|| black_box(btree.iter().sum::<u64>()));
        });
    }

    group.finish();
}

/// Benchmark word-level algebra against the sorted-merge fallback
fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra_union");

    for size in [1000u64, 10_000, 100_000].iter() {
        // Same shape: word-level path
        group.bench_with_input(BenchmarkId::new("same_shape", size), size, |b, &size| {
            let x = FixedSet::<Dense64>::new(size);
            let y = FixedSet::<Dense64>::new(size);
            x.insert_all((0..size).step_by(2));
            y.insert_all((0..size).step_by(3));

            b.iter(|| black_box(x.union(&y).size()));
        });

        // Mixed shapes: sorted merge into a growable result
        group.bench_with_input(BenchmarkId::new("mixed_shape", size), size, |b, &size| {
            let x = AnySet::from(FixedSet::<Dense64>::new(size));
            let y = AnySet::from(GrowableSet::<Reserved15>::new());
            x.insert_all((0..size).step_by(2));
            y.insert_all((0..size).step_by(3));

            b.iter(|| black_box(x.union(&y).size()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, &size| {
            let x: BTreeSet<u64> = (0..size).step_by(2).collect();
            let y: BTreeSet<u64> = (0..size).step_by(3).collect();

            b.iter(|| black_box(x.union(&y).count()));
        });
    }

    group.finish();
}

/// Benchmark intersection and equality on the word-level path
fn bench_intersect_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra_intersect_equal");
    let size = 100_000u64;

    let x = GrowableSet::<Reserved63>::new();
    let y = GrowableSet::<Reserved63>::new();
    x.insert_all((0..size).step_by(2));
    y.insert_all((0..size).step_by(2));

    group.bench_function("intersect", |b| b.iter(|| black_box(x.intersect(&y).size())));
    group.bench_function("equal", |b| b.iter(|| black_box(x.equal(&y))));

    group.finish();
}

/// Benchmark concurrent inserts from several threads
fn bench_concurrent_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_insert");
    let per_thread = 10_000u64;

    for threads in [1u64, 2, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("GrowableSet", threads),
            threads,
            |b, &threads| {
                b.iter(|| {
                    let set = Arc::new(GrowableSet::<Reserved63>::new());
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let set = Arc::clone(&set);
                            thread::spawn(move || {
                                for i in 0..per_thread {
                                    set.insert(i * threads + t);
                                }
                            })
                        })
                        .collect();
                    for h in handles {
                        h.join().unwrap();
                    }
                    black_box(set.size())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("FixedSet", threads),
            threads,
            |b, &threads| {
                b.iter(|| {
                    let set = Arc::new(FixedSet::<Dense64>::new(per_thread * threads));
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let set = Arc::clone(&set);
                            thread::spawn(move || {
                                for i in 0..per_thread {
                                    set.insert(i * threads + t);
                                }
                            })
                        })
                        .collect();
                    for h in handles {
                        h.join().unwrap();
                    }
                    black_box(set.size())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Mutex<HashSet>", threads),
            threads,
            |b, &threads| {
                b.iter(|| {
                    let set = Arc::new(Mutex::new(HashSet::new()));
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let set = Arc::clone(&set);
                            thread::spawn(move || {
                                for i in 0..per_thread {
                                    set.lock().unwrap().insert(i * threads + t);
                                }
                            })
                        })
                        .collect();
                    for h in handles {
                        h.join().unwrap();
                    }
                    let len = set.lock().unwrap().len();
                    black_box(len)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_clustered,
    bench_iteration,
    bench_algebra,
    bench_intersect_equal,
    bench_concurrent_insert
);
criterion_main!(benches);
