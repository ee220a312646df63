//! Criterion micro-benchmarks for break reads, moves, and growth.

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Instant;

use brink_bench::{ample_break, stepped_break, GROWTH_STEP};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Read the current break, the `sbrk(0)` idiom.
fn bench_current(c: &mut Criterion) {
    let brk = ample_break();
    c.bench_function("break_current", |b| b.iter(|| black_box(brk.current())));
}

/// Install the position the break already holds: one capacity check and
/// one swap, no retries, no growth.
fn bench_set_break_noop(c: &mut Criterion) {
    let brk = ample_break();
    brk.set_break(4096).unwrap();
    c.bench_function("set_break_noop", |b| {
        b.iter(|| brk.set_break(black_box(4096)).unwrap());
    });
}

/// Uncontended reserve-and-release round trip.
fn bench_advance_round_trip(c: &mut Criterion) {
    let brk = ample_break();
    c.bench_function("advance_round_trip", |b| {
        b.iter(|| {
            let start = brk.advance_break(black_box(64)).unwrap();
            brk.advance_break(black_box(-64)).unwrap();
            black_box(start)
        });
    });
}

/// Every advance crosses the capacity boundary and grows the region by
/// exactly one step.
fn bench_advance_with_growth(c: &mut Criterion) {
    let brk = stepped_break(usize::MAX);
    c.bench_function("advance_with_growth", |b| {
        b.iter(|| black_box(brk.advance_break(GROWTH_STEP as isize).unwrap()));
    });
}

/// Four threads hammering one break manager. Reports wall-clock time for
/// the whole gang to finish its share of iterations.
fn bench_advance_contended(c: &mut Criterion) {
    const THREADS: usize = 4;

    c.bench_function("advance_contended_4_threads", |b| {
        b.iter_custom(|iters| {
            let brk = Arc::new(ample_break());
            let barrier = Arc::new(Barrier::new(THREADS + 1));
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let brk = Arc::clone(&brk);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        for _ in 0..iters {
                            black_box(brk.advance_break(black_box(8)).unwrap());
                            black_box(brk.advance_break(black_box(-8)).unwrap());
                        }
                    })
                })
                .collect();
            let start = Instant::now();
            barrier.wait();
            for handle in handles {
                handle.join().expect("bench thread panicked");
            }
            start.elapsed()
        });
    });
}

criterion_group!(
    benches,
    bench_current,
    bench_set_break_noop,
    bench_advance_round_trip,
    bench_advance_with_growth,
    bench_advance_contended
);
criterion_main!(benches);
