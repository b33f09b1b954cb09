//! Benchmark profiles for the Sway simulator.
//!
//! - [`reference_profile`]: the classic 100x100 run seeded at the centre
//! - [`stress_profile`]: 316x316 (~100K cells) with a few scattered sources
//! - [`spread_lattice`]: a pre-filled lattice for strategy micro-benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sway_core::Lattice;
use sway_engine::{SimConfig, StrategyKind};
use sway_propagators::{NeighbourRule, VisitOrder};
use sway_space::EdgeBehavior;

/// 100x100 grid, one central source, 10% coverage, default strategy.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        side: 100,
        sources: vec![(50, 50)],
        coverage: 0.1,
        seed,
        ..SimConfig::default()
    }
}

/// 316x316 grid with four sources, accumulated visits.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        side: 316,
        edge: EdgeBehavior::Absorb,
        sources: vec![(79, 79), (79, 237), (237, 79), (237, 237)],
        coverage: 0.1,
        seed,
        strategy: StrategyKind::Neighbour {
            rule: NeighbourRule::Decrement,
            order: VisitOrder::Accumulated,
        },
        ..SimConfig::default()
    }
}

/// A `side x side` lattice with every cell in the tolerant band and one
/// source every `stride` cells along both axes.
pub fn spread_lattice(side: usize, stride: usize) -> Lattice {
    let mut cells = vec![0.75; side * side];
    for row in (0..side).step_by(stride.max(1)) {
        for col in (0..side).step_by(stride.max(1)) {
            cells[row * side + col] = 0.0;
        }
    }
    Lattice::from_values(side, cells).expect("side * side cells")
}
