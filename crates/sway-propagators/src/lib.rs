//! Reference update strategies for Sway simulations.
//!
//! - [`NeighbourDiffusion`]: every source pushes influence into its eight
//!   neighbours, attenuated by distance and time.
//! - [`FieldDecay`]: a single anchor source pushes influence into the
//!   whole grid.
//! - [`GullibleSelection`]: one neighbour of a random source is
//!   converted, preferring gullible cells.
//! - [`MonteCarloSelection`]: one neighbour of a random source is
//!   converted with probability proportional to its value.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod field_decay;
pub mod neighbour_diffusion;
pub mod selection;

pub use field_decay::FieldDecay;
pub use neighbour_diffusion::{
    NeighbourDiffusion, NeighbourDiffusionBuilder, NeighbourRule, VisitOrder,
};
pub use selection::{GullibleSelection, MonteCarloSelection};
