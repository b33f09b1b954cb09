//! Update-strategy trait and step context for Sway simulations.
//!
//! The [`UpdateStrategy`] trait defines the `&self` step function over a
//! [`StepContext`] that lends out the lattice, the topology, and the
//! random source for one step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod rng;
pub mod strategy;

pub use context::{StepContext, StepParams};
pub use rng::SeededRandom;
pub use strategy::{StepReport, UpdateStrategy};
