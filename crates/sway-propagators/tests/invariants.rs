//! Properties every strategy upholds after every step.

use proptest::prelude::*;
use sway_core::{Lattice, TickId};
use sway_propagator::{SeededRandom, StepContext, StepParams, UpdateStrategy};
use sway_propagators::{
    FieldDecay, GullibleSelection, MonteCarloSelection, NeighbourDiffusion, NeighbourRule,
    VisitOrder,
};
use sway_space::{EdgeBehavior, Square8};

fn strategies() -> Vec<Box<dyn UpdateStrategy>> {
    vec![
        Box::new(NeighbourDiffusion::default()),
        Box::new(
            NeighbourDiffusion::builder()
                .rule(NeighbourRule::ReplaceFromSource)
                .build(),
        ),
        Box::new(
            NeighbourDiffusion::builder()
                .order(VisitOrder::Accumulated)
                .build(),
        ),
        Box::new(FieldDecay::new()),
        Box::new(GullibleSelection::new()),
        Box::new(MonteCarloSelection::new()),
    ]
}

fn lattice_strategy() -> impl Strategy<Value = Lattice> {
    (3usize..8).prop_flat_map(|side| {
        let cell = prop_oneof![Just(0.0), 0.001f64..0.5, 0.5f64..1.0, Just(10000.0)];
        prop::collection::vec(cell, side * side)
            .prop_map(move |cells| Lattice::from_values(side, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn no_negative_cells_and_sources_persist(
        lattice in lattice_strategy(),
        strength in 0.0f64..5.0,
        decay in 0.1f64..10.0,
        t in 0u64..20,
        seed in any::<u64>(),
        wrap in any::<bool>(),
    ) {
        let edge = if wrap { EdgeBehavior::Wrap } else { EdgeBehavior::Absorb };
        let space = Square8::new(lattice.side(), edge).unwrap();
        let params = StepParams { source_strength: strength, decay_constant: decay, time_index: t };

        for strategy in strategies() {
            let mut work = lattice.clone();
            let mut rng = SeededRandom::new(seed);
            for step in 0..3u64 {
                let before = work.sources();
                let report = {
                    let mut ctx = StepContext::new(&mut work, &space, &mut rng, TickId(step), params);
                    strategy.apply(&mut ctx).unwrap()
                };
                prop_assert!(work.values().iter().all(|&v| v >= 0.0), "{}", strategy.name());
                for &(r, c) in &before {
                    prop_assert_eq!(work.get(r, c), Some(0.0));
                }
                prop_assert_eq!(work.count_sources(), before.len() + report.converted);
            }
        }
    }
}

#[test]
fn same_seed_same_lattice() {
    let start = Lattice::from_values(6, vec![0.7; 36]).unwrap();
    let space = Square8::new(6, EdgeBehavior::Absorb).unwrap();
    let params = StepParams {
        source_strength: 1.0,
        decay_constant: 1.0,
        time_index: 1,
    };

    for strategy in strategies() {
        let run = || {
            let mut lattice = start.clone();
            lattice.set(2, 3, 0.0).unwrap();
            let mut rng = SeededRandom::new(99);
            for tick in 0..5 {
                let mut ctx = StepContext::new(&mut lattice, &space, &mut rng, TickId(tick), params);
                strategy.apply(&mut ctx).unwrap();
            }
            lattice
        };
        let a = run();
        let b = run();
        let bits = |l: &Lattice| l.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b), "{}", strategy.name());
    }
}

#[test]
fn diffusion_grows_sources_over_steps() {
    let mut lattice = Lattice::from_values(9, vec![0.6; 81]).unwrap();
    lattice.set(4, 4, 0.0).unwrap();
    let space = Square8::new(9, EdgeBehavior::Absorb).unwrap();
    let params = StepParams {
        source_strength: 1.0,
        decay_constant: 1.0,
        time_index: 1,
    };
    let strategy = NeighbourDiffusion::default();
    let mut rng = SeededRandom::new(3);

    let mut counts = vec![lattice.count_sources()];
    for tick in 0..30 {
        let mut ctx = StepContext::new(&mut lattice, &space, &mut rng, TickId(tick), params);
        strategy.apply(&mut ctx).unwrap();
        counts.push(lattice.count_sources());
    }
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    assert!(*counts.last().unwrap() > 1);
}
