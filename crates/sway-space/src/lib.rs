//! Spatial topology for Sway simulations.
//!
//! A single backend, [`Square8`], describes the 8-connected square grid
//! that influence spreads over. Out-of-range neighbours are resolved by
//! explicit branching on [`EdgeBehavior`], never by catching errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub(crate) mod grid2d;
pub mod square8;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use square8::{Neighbour, Square8, OFFSETS_8};
