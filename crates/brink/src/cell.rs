//! Storage strategies for the break word.
//!
//! The break manager is generic over where its one word of state lives.
//! [`AtomicBreak`] is the shared strategy: an atomic word updated with
//! compare-and-swap, safe to hammer from any number of threads.
//! [`LocalBreak`] is the single-threaded strategy: a plain [`Cell`] with
//! no atomic traffic, and `!Sync` so the compiler rejects any attempt to
//! share it across threads.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One word of break storage plus the conditional swap every update is
/// built on.
///
/// `try_swap` is the linearization point of a break update: it installs
/// `new` only if the word still holds `current`, and otherwise reports
/// the value actually present so the caller revalidates against fresh
/// state instead of publishing a stale decision.
pub trait BreakCell {
    /// Create a cell holding `value`.
    fn new(value: usize) -> Self;

    /// Read the current word.
    fn load(&self) -> usize;

    /// Install `new` if the word still holds `current`.
    ///
    /// On failure the word is untouched and the value found is returned.
    fn try_swap(&self, current: usize, new: usize) -> Result<(), usize>;
}

/// Shared break storage: one atomic word.
///
/// All accesses are sequentially consistent, keeping every break
/// movement in a single total order. A thread that observes a moved
/// break therefore also observes everything the mover published before
/// winning its swap.
#[derive(Debug)]
pub struct AtomicBreak(AtomicUsize);

impl BreakCell for AtomicBreak {
    fn new(value: usize) -> Self {
        Self(AtomicUsize::new(value))
    }

    fn load(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn try_swap(&self, current: usize, new: usize) -> Result<(), usize> {
        self.0
            .compare_exchange(current, new, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| ())
    }
}

/// Single-threaded break storage: a plain [`Cell`].
///
/// `Cell` is `!Sync`, so a break manager over `LocalBreak` cannot be
/// shared across threads at all. Nothing can interleave between the read
/// and the write below, which makes the swap infallible in practice.
#[derive(Debug)]
pub struct LocalBreak(Cell<usize>);

impl BreakCell for LocalBreak {
    fn new(value: usize) -> Self {
        Self(Cell::new(value))
    }

    fn load(&self) -> usize {
        self.0.get()
    }

    fn try_swap(&self, current: usize, new: usize) -> Result<(), usize> {
        let found = self.0.get();
        if found == current {
            self.0.set(new);
            Ok(())
        } else {
            Err(found)
        }
    }
}
