//! Core types and traits for the Sway influence simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the lattice buffer, the value-band classifier, step identifiers,
//! error types, and the [`RandomSource`] capability injected into every
//! mutator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod category;
pub mod error;
pub mod id;
pub mod lattice;
pub mod traits;

pub use category::{classify, Category, CategoryCounts, GULLIBLE_MAX, SOURCE, TOLERANT_MAX, UNASSIGNED};
pub use error::{InitError, LatticeError, StrategyError};
pub use id::{Coord, TickId};
pub use lattice::Lattice;
pub use traits::RandomSource;
