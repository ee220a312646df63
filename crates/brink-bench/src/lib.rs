//! Benchmark profiles for the brink break manager.
//!
//! Pre-built break configurations shared by the criterion benchmarks:
//!
//! - [`ample_break`]: a region that always fits, so no update ever grows it
//! - [`stepped_break`]: a region starting empty and growing 64 KiB per enlarge
//!
//! Both use the counting oracles from `brink-test-utils`, so a benchmark
//! can also report how often the region was consulted.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use brink::ProgramBreak;
use brink_test_utils::{FixedOracle, SteppedOracle};

/// Capacity gained per enlarge in [`stepped_break`].
pub const GROWTH_STEP: usize = 64 * 1024;

/// Build a break manager whose region never needs to grow.
pub fn ample_break() -> ProgramBreak<FixedOracle> {
    ProgramBreak::new(0, FixedOracle::new(usize::MAX))
}

/// Build a break manager over a region that starts empty and grows
/// [`GROWTH_STEP`] bytes per enlarge, up to `limit`.
pub fn stepped_break(limit: usize) -> ProgramBreak<SteppedOracle> {
    ProgramBreak::new(0, SteppedOracle::new(0, GROWTH_STEP, limit))
}
