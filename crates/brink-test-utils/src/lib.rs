//! Test oracles and fixtures for brink development.
//!
//! Counting [`GrowthOracle`] implementations for asserting how the break
//! machinery consults its backing region:
//!
//! - [`FixedOracle`]: constant capacity, refuses every enlarge.
//! - [`SteppedOracle`]: grows by a fixed step up to a hard limit.
//!
//! Both record how often each capability was exercised, so tests can pin
//! down not just the outcome of a break update but the conversation it
//! had with the region.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};

use brink_core::GrowthOracle;

/// A backing region frozen at a fixed capacity.
///
/// `try_enlarge` always refuses. Use it to test the no-growth paths and
/// the out-of-memory reporting.
pub struct FixedOracle {
    capacity: usize,
    capacity_queries: AtomicUsize,
    enlarge_attempts: AtomicUsize,
}

impl FixedOracle {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            capacity_queries: AtomicUsize::new(0),
            enlarge_attempts: AtomicUsize::new(0),
        }
    }

    /// How many times `current_capacity` has been called.
    pub fn capacity_queries(&self) -> usize {
        self.capacity_queries.load(Ordering::Relaxed)
    }

    /// How many times `try_enlarge` has been called.
    pub fn enlarge_attempts(&self) -> usize {
        self.enlarge_attempts.load(Ordering::Relaxed)
    }
}

impl GrowthOracle for FixedOracle {
    fn current_capacity(&self) -> usize {
        self.capacity_queries.fetch_add(1, Ordering::Relaxed);
        self.capacity
    }

    fn try_enlarge(&self) -> bool {
        self.enlarge_attempts.fetch_add(1, Ordering::Relaxed);
        false
    }
}

/// A backing region that grows by a fixed step up to a hard limit.
///
/// Growth happens in one atomic update, so the fixture can be contended
/// from many threads: every successful `try_enlarge` corresponds to
/// exactly one capacity bump, and capacity never exceeds the limit.
pub struct SteppedOracle {
    capacity: AtomicUsize,
    step: usize,
    limit: usize,
    enlarge_attempts: AtomicUsize,
}

impl SteppedOracle {
    /// Create an oracle starting at `capacity`, growing by `step` per
    /// successful enlarge, refusing once `limit` is reached.
    pub fn new(capacity: usize, step: usize, limit: usize) -> Self {
        Self {
            capacity: AtomicUsize::new(capacity),
            step,
            limit,
            enlarge_attempts: AtomicUsize::new(0),
        }
    }

    /// The capacity the oracle currently reports.
    pub fn capacity(&self) -> usize {
        self.capacity.load(Ordering::SeqCst)
    }

    /// The capacity the oracle will never grow beyond.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// How many times `try_enlarge` has been called, refusals included.
    pub fn enlarge_attempts(&self) -> usize {
        self.enlarge_attempts.load(Ordering::Relaxed)
    }
}

impl GrowthOracle for SteppedOracle {
    fn current_capacity(&self) -> usize {
        self.capacity.load(Ordering::SeqCst)
    }

    fn try_enlarge(&self) -> bool {
        self.enlarge_attempts.fetch_add(1, Ordering::Relaxed);
        self.capacity
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cap| {
                (cap < self.limit).then(|| cap.saturating_add(self.step).min(self.limit))
            })
            .is_ok()
    }
}
