//! Core contract types for the brink program-break manager.
//!
//! This is the leaf crate of the workspace: it has no dependencies and
//! defines the vocabulary shared by the break machinery in `brink` and by
//! backing-region implementations supplied by embedders.
//!
//! # Modules
//!
//! - [`error`]: the [`BreakError`] failure type returned by break updates
//! - [`oracle`]: the [`GrowthOracle`] capability a backing region implements
//!
//! Key types are re-exported at the crate root.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod oracle;

pub use error::BreakError;
pub use oracle::GrowthOracle;
