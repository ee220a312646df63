//! Break-update error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while moving a program break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreakError {
    /// The requested break does not fit the backing region, and the region
    /// could not be enlarged to cover it.
    ///
    /// Also reported when a relative adjustment overflows the address
    /// range; `requested` is then [`usize::MAX`]. A failed update never
    /// moves the break.
    OutOfMemory {
        /// The break position that was requested.
        requested: usize,
        /// The region capacity at the time the request was refused.
        capacity: usize,
    },
}

impl fmt::Display for BreakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "out of memory: requested break {requested:#x} exceeds region capacity {capacity:#x}"
                )
            }
        }
    }
}

impl Error for BreakError {}
