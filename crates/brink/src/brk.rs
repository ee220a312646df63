//! The break manager over a growable backing region.
//!
//! [`ProgramBreak`] bundles the break word with the [`GrowthOracle`] that
//! governs how far it may move. The update loop here is the whole crate:
//! validate a candidate break against capacity, grow the region when the
//! oracle permits, publish with a conditional swap, retry on
//! interference.

use brink_core::{BreakError, GrowthOracle};

use crate::cell::{AtomicBreak, BreakCell, LocalBreak};

/// A program break over a growable backing region.
///
/// The break is the one-past-the-end position of the in-use part of a
/// region: everything below it belongs to the allocator sitting on top,
/// everything between it and the region capacity is headroom. A
/// `ProgramBreak` is a value, not a global. It owns that position and
/// moves it on request:
///
/// - [`set_break`](Self::set_break) installs an absolute position;
/// - [`advance_break`](Self::advance_break) applies a signed adjustment
///   and returns the break it replaced, the classic `sbrk` contract.
///
/// Updates are optimistic and never block. Each call reads the break,
/// validates its candidate against the oracle's capacity (asking the
/// oracle to enlarge the region when the candidate does not fit), and
/// publishes with a conditional swap. Losing the swap to a concurrent
/// caller means the candidate was computed from a stale break; the call
/// recomputes from the value that beat it and tries again.
///
/// The storage parameter `C` picks the concurrency strategy:
/// [`AtomicBreak`] (the default) for a manager shared across threads,
/// [`LocalBreak`] for a single-threaded manager with no atomic traffic.
#[derive(Debug)]
pub struct ProgramBreak<O, C = AtomicBreak> {
    top: C,
    oracle: O,
}

/// A single-threaded break manager.
///
/// Same contract as the atomic configuration, with the break in a plain
/// `Cell`. The cell is `!Sync`, so code that tries to share one of these
/// across threads does not compile. Construct with
/// [`ProgramBreak::new_local`].
pub type LocalProgramBreak<O> = ProgramBreak<O, LocalBreak>;

// Compile-time assertion: the atomic configuration stays Send + Sync for
// any Send + Sync oracle.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check<O: Send + Sync>() {
        assert_send_sync::<ProgramBreak<O, AtomicBreak>>();
    }
};

impl<O: GrowthOracle> ProgramBreak<O> {
    /// Create a shareable break manager with the break at `initial_top`.
    ///
    /// `initial_top` is normally the base of the heap inside the region.
    /// It is not checked against the oracle; a break seeded beyond
    /// capacity simply fails its first growing update.
    pub fn new(initial_top: usize, oracle: O) -> Self {
        Self::with_cell(AtomicBreak::new(initial_top), oracle)
    }
}

impl<O: GrowthOracle> ProgramBreak<O, LocalBreak> {
    /// Create a single-threaded break manager with the break at
    /// `initial_top`.
    ///
    /// The result is a [`LocalProgramBreak`]: the same contract as
    /// [`new`](ProgramBreak::new) without atomic traffic, usable with
    /// oracles that are not thread-safe.
    pub fn new_local(initial_top: usize, oracle: O) -> Self {
        Self::with_cell(LocalBreak::new(initial_top), oracle)
    }
}

impl<O: GrowthOracle, C: BreakCell> ProgramBreak<O, C> {
    /// Create a break manager over caller-supplied storage.
    ///
    /// [`ProgramBreak::new`] and [`ProgramBreak::new_local`] cover the
    /// shipped storage strategies; this constructor accepts any
    /// [`BreakCell`].
    pub fn with_cell(cell: C, oracle: O) -> Self {
        Self { top: cell, oracle }
    }

    /// The current break position.
    ///
    /// Equivalent to `advance_break(0)` without the `Result` wrapping.
    pub fn current(&self) -> usize {
        self.top.load()
    }

    /// The growth oracle this manager consults.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Move the break to the absolute position `new_top`.
    ///
    /// A position at or below the current capacity is installed
    /// directly. A position above it makes the manager ask the oracle to
    /// enlarge the region, as often as the oracle keeps agreeing, until
    /// the position fits. Moving the break down releases address space
    /// for reuse but never shrinks the region itself.
    ///
    /// # Errors
    ///
    /// [`BreakError::OutOfMemory`] if `new_top` still exceeds capacity
    /// once the oracle refuses to grow further. The break keeps its
    /// previous value.
    pub fn set_break(&self, new_top: usize) -> Result<(), BreakError> {
        self.install(|_| Some(new_top)).map(|_| ())
    }

    /// Adjust the break by `increment` and return the break it replaced.
    ///
    /// A positive increment reserves the address range
    /// `[old, old + increment)` exclusively for the caller; concurrent
    /// callers are each handed disjoint ranges. A negative increment
    /// releases space. `advance_break(0)` reads the break without moving
    /// it.
    ///
    /// # Errors
    ///
    /// [`BreakError::OutOfMemory`] if the adjusted break would not fit a
    /// region the oracle declines to grow, or if the adjustment leaves
    /// the address range entirely. The break keeps its previous value.
    pub fn advance_break(&self, increment: isize) -> Result<usize, BreakError> {
        self.install(|old| old.checked_add_signed(increment))
    }

    /// The optimistic update loop shared by both public mutators.
    ///
    /// `candidate` maps an observed break to the desired new break, or
    /// `None` when the request is not representable. Every pass
    /// revalidates against freshly queried capacity, growing the region
    /// as needed, then publishes with a conditional swap. A lost swap
    /// means another caller moved the break; the loop recomputes from
    /// the value that beat it. Returns the break the winning swap
    /// replaced.
    fn install<F>(&self, candidate: F) -> Result<usize, BreakError>
    where
        F: Fn(usize) -> Option<usize>,
    {
        let mut old = self.top.load();
        loop {
            let Some(new_top) = candidate(old) else {
                return Err(BreakError::OutOfMemory {
                    requested: usize::MAX,
                    capacity: self.oracle.current_capacity(),
                });
            };
            let capacity = self.oracle.current_capacity();
            if new_top <= capacity {
                match self.top.try_swap(old, new_top) {
                    Ok(()) => return Ok(old),
                    Err(actual) => {
                        old = actual;
                        continue;
                    }
                }
            }
            if !self.oracle.try_enlarge() {
                return Err(BreakError::OutOfMemory {
                    requested: new_top,
                    capacity,
                });
            }
            // Capacity moved; the break may have too.
            old = self.top.load();
        }
    }
}
