//! Sway: a lattice influence-diffusion simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sway sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use sway::prelude::*;
//!
//! let config = SimConfig {
//!     side: 12,
//!     sources: vec![(6, 6)],
//!     coverage: 0.3,
//!     seed: 7,
//!     ..SimConfig::default()
//! };
//! let mut sink = MemorySink::new();
//! let outcome = Simulation::with_hooks(config, NullObserver, &mut sink)
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert!(outcome.is_converged());
//! assert_eq!(sink.names(), vec!["Initial Population 0.3", "Final Population"]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sway-core` | Lattice, categories, errors, `RandomSource` |
//! | [`space`] | `sway-space` | `Square8` topology and edge handling |
//! | [`propagator`] | `sway-propagator` | `UpdateStrategy` trait, step context, seeded RNG |
//! | [`propagators`] | `sway-propagators` | Diffusion, field decay, and selection strategies |
//! | [`snapshot`] | `sway-snapshot` | CSV snapshots and lattice hashing |
//! | [`engine`] | `sway-engine` | Configuration, initializer, run loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice, categories, IDs, and error types (`sway-core`).
pub use sway_core as types;

/// The 8-connected square topology (`sway-space`).
pub use sway_space as space;

/// The [`propagator::UpdateStrategy`] trait and its step context
/// (`sway-propagator`).
pub use sway_propagator as propagator;

/// Reference update strategies (`sway-propagators`).
pub use sway_propagators as propagators;

/// Snapshot sinks, CSV encoding, and hashing (`sway-snapshot`).
pub use sway_snapshot as snapshot;

/// Configuration and the simulation driver (`sway-engine`).
pub use sway_engine as engine;

/// Common imports for typical Sway usage.
pub mod prelude {
    // Core types
    pub use sway_core::{classify, Category, CategoryCounts, Coord, Lattice, RandomSource};

    // Space
    pub use sway_space::{EdgeBehavior, Square8};

    // Strategies
    pub use sway_propagator::{SeededRandom, StepContext, StepParams, StepReport, UpdateStrategy};
    pub use sway_propagators::{
        FieldDecay, GullibleSelection, MonteCarloSelection, NeighbourDiffusion, NeighbourRule,
        VisitOrder,
    };

    // Persistence
    pub use sway_snapshot::{lattice_hash, CsvDirSink, MemorySink, NullSink, SnapshotSink};

    // Engine
    pub use sway_engine::{
        Clock, InitConfig, NullObserver, Observer, RunOutcome, SimConfig, SimError, Simulation,
        StepMetrics, StrategyKind, TracingObserver,
    };
}
