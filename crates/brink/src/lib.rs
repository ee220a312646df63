//! Lock-free program-break management over growable memory regions.
//!
//! A program break is the classic Unix view of a heap: one address
//! marking the top of the in-use region, moved up to reserve address
//! space and down to release it. This crate keeps that single word
//! consistent under concurrent mutation without locks, and funnels every
//! capacity decision through a [`GrowthOracle`] supplied by whoever owns
//! the backing region.
//!
//! The central type is [`ProgramBreak`]: a value, not a process-wide
//! global. It pairs the break word with its oracle, publishes every
//! movement through an optimistic compare-and-swap loop, and hands
//! concurrent reservers disjoint address ranges. Share one across
//! threads as `Arc<ProgramBreak<..>>`; use [`LocalProgramBreak`] when
//! everything runs on one thread and atomic traffic is unwelcome.
//!
//! # Quick start
//!
//! ```rust
//! use brink::{GrowthOracle, ProgramBreak};
//!
//! // A region with a fixed 64 KiB capacity that never grows.
//! struct FixedRegion;
//!
//! impl GrowthOracle for FixedRegion {
//!     fn current_capacity(&self) -> usize {
//!         64 * 1024
//!     }
//!     fn try_enlarge(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let brk = ProgramBreak::new(0, FixedRegion);
//!
//! // Reserve 4 KiB: the returned value is the base of the new range.
//! let base = brk.advance_break(4096)?;
//! assert_eq!(base, 0);
//! assert_eq!(brk.current(), 4096);
//!
//! // Release it again.
//! brk.advance_break(-4096)?;
//! assert_eq!(brk.current(), 0);
//! # Ok::<(), brink::BreakError>(())
//! ```
//!
//! # Modules
//!
//! - [`brk`]: the break manager and its update loop
//! - [`cell`]: storage strategies for the break word
//!
//! The [`GrowthOracle`] trait and [`BreakError`] type live in
//! `brink-core` and are re-exported here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brk;
pub mod cell;

pub use brink_core::{BreakError, GrowthOracle};

pub use brk::{LocalProgramBreak, ProgramBreak};
pub use cell::{AtomicBreak, BreakCell, LocalBreak};
