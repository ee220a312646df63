//! The growth capability a backing region exposes to the break manager.

use std::sync::Arc;

/// Capability handed to a break manager by whoever owns the backing
/// region.
///
/// The break machinery never grows memory itself. When a requested break
/// does not fit, it asks the oracle to enlarge the region and then
/// re-reads the capacity. Implementations decide what growth means:
/// remapping, committing pages, raising a soft limit, or refusing
/// outright.
///
/// Both methods take `&self`, so implementations that mutate state need
/// interior mutability. An oracle used by a break manager shared across
/// threads must also be `Send + Sync`; the compiler enforces that at the
/// point of sharing.
pub trait GrowthOracle {
    /// Current capacity of the backing region, as a one-past-the-end
    /// position in the same address space as the break.
    ///
    /// Read-only and callable at any time. The value may rise between two
    /// calls (another thread may have grown the region) but must never
    /// fall while a break manager is using the oracle.
    fn current_capacity(&self) -> usize;

    /// Attempt to enlarge the backing region.
    ///
    /// Returns `true` if capacity grew by any amount. The caller re-reads
    /// [`current_capacity`](Self::current_capacity) and re-checks its
    /// request rather than assuming a particular new size. Returns
    /// `false` when no further growth is possible. Safe to call
    /// repeatedly and from multiple threads.
    fn try_enlarge(&self) -> bool;
}

impl<O: GrowthOracle + ?Sized> GrowthOracle for &O {
    fn current_capacity(&self) -> usize {
        (**self).current_capacity()
    }

    fn try_enlarge(&self) -> bool {
        (**self).try_enlarge()
    }
}

impl<O: GrowthOracle + ?Sized> GrowthOracle for Box<O> {
    fn current_capacity(&self) -> usize {
        (**self).current_capacity()
    }

    fn try_enlarge(&self) -> bool {
        (**self).try_enlarge()
    }
}

impl<O: GrowthOracle + ?Sized> GrowthOracle for Arc<O> {
    fn current_capacity(&self) -> usize {
        (**self).current_capacity()
    }

    fn try_enlarge(&self) -> bool {
        (**self).try_enlarge()
    }
}
