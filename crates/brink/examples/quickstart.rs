//! Brink quickstart: a break manager from scratch.
//!
//! Demonstrates:
//!   1. Implementing a `GrowthOracle` for a region that doubles on demand
//!   2. Reserving and releasing address space with `advance_break`
//!   3. Absolute moves and out-of-memory reporting with `set_break`
//!   4. Sharing one break manager across a gang of threads
//!
//! Run with:
//!   cargo run --example quickstart

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use brink::{BreakError, GrowthOracle, ProgramBreak};

// ─── Region parameters ──────────────────────────────────────────

const INITIAL_CAPACITY: usize = 4 * 1024;
const CAPACITY_LIMIT: usize = 64 * 1024;
const WORKERS: usize = 8;
const RESERVATIONS_PER_WORKER: usize = 4;
const RESERVATION: usize = 1024;

// ─── Oracle: a region that doubles on demand ────────────────────
//
// Stands in for whatever actually backs the heap: an mmap'd arena, a
// wasm linear memory, a plain fixed buffer. Doubles its capacity when
// asked, refuses beyond the hard limit.

struct DoublingRegion {
    capacity: AtomicUsize,
    limit: usize,
}

impl DoublingRegion {
    fn new(capacity: usize, limit: usize) -> Self {
        Self {
            capacity: AtomicUsize::new(capacity),
            limit,
        }
    }
}

impl GrowthOracle for DoublingRegion {
    fn current_capacity(&self) -> usize {
        self.capacity.load(Ordering::SeqCst)
    }

    fn try_enlarge(&self) -> bool {
        self.capacity
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cap| {
                (cap < self.limit).then(|| cap.saturating_mul(2).min(self.limit))
            })
            .is_ok()
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Brink Quickstart ===\n");

    // 1. A break manager over a 4 KiB region that can double up to 64 KiB.
    let brk = ProgramBreak::new(0, DoublingRegion::new(INITIAL_CAPACITY, CAPACITY_LIMIT));
    println!(
        "Region: {} bytes, growable to {} bytes",
        brk.oracle().current_capacity(),
        CAPACITY_LIMIT
    );

    // 2. Reserve and release: advance returns the base of the new range.
    let base = brk.advance_break(2048)?;
    println!("Reserved [{base:#x}, {:#x})", brk.current());
    brk.advance_break(-2048)?;
    println!("Released it, break back to {:#x}", brk.current());

    // 3. Absolute moves grow the region as far as the oracle allows, and
    //    no further.
    brk.set_break(16 * 1024)?;
    println!(
        "set_break({:#x}) grew the region to {:#x}",
        16 * 1024,
        brk.oracle().current_capacity()
    );
    match brk.set_break(CAPACITY_LIMIT + 1) {
        Err(BreakError::OutOfMemory {
            requested,
            capacity,
        }) => {
            println!("set_break({requested:#x}) refused at capacity {capacity:#x}");
        }
        other => return Err(format!("expected out-of-memory, got {other:?}").into()),
    }
    brk.set_break(0)?;

    // 4. Eight workers reserving concurrently: every range is disjoint.
    println!("\nReserving from {WORKERS} threads...");
    let brk = Arc::new(brk);
    let workers: Vec<_> = (0..WORKERS)
        .map(|id| {
            let brk = Arc::clone(&brk);
            thread::spawn(move || {
                for _ in 0..RESERVATIONS_PER_WORKER {
                    match brk.advance_break(RESERVATION as isize) {
                        Ok(start) => {
                            println!("  worker {id}: [{start:#x}, {:#x})", start + RESERVATION);
                        }
                        Err(err) => println!("  worker {id}: {err}"),
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    println!("\nFinal break:    {:#x}", brk.current());
    println!("Final capacity: {:#x}", brk.oracle().current_capacity());
    Ok(())
}
