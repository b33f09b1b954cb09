//! Closed-form whole-grid decay from a single anchor source.
//!
//! Every non-source cell other than the anchor receives
//! `M(t) * (-α / d)`, with `d` the Euclidean distance to the anchor and
//! a fresh `α` per cell drawn in row-major order. Cells far from the
//! anchor are barely touched; neighbours of the anchor convert first.

use sway_core::{Coord, StrategyError, SOURCE};
use sway_propagator::{StepContext, StepReport, UpdateStrategy};

use crate::neighbour_diffusion::converted_since;

/// Whole-grid decay anchored at one source.
///
/// Without an explicit anchor the first source in row-major order is
/// used; a lattice with no sources makes the step a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDecay {
    anchor: Option<Coord>,
}

impl FieldDecay {
    /// Anchor at the first source found each step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor at a fixed coordinate.
    pub fn anchored_at(anchor: Coord) -> Self {
        Self {
            anchor: Some(anchor),
        }
    }

    /// The fixed anchor, if one was configured.
    pub fn anchor(&self) -> Option<Coord> {
        self.anchor
    }
}

impl UpdateStrategy for FieldDecay {
    fn name(&self) -> &str {
        "FieldDecay"
    }

    fn apply(&self, ctx: &mut StepContext<'_>) -> Result<StepReport, StrategyError> {
        ctx.check()?;
        let space = ctx.space();
        let multiplier = ctx.params().multiplier();

        let anchor = match self.anchor {
            Some((row, col)) if !space.contains(row, col) => {
                return Err(StrategyError::AnchorOutOfBounds { row, col });
            }
            Some(anchor) => anchor,
            None => match ctx.lattice().sources().first() {
                Some(&first) => first,
                None => return Ok(StepReport::default()),
            },
        };

        let (lattice, rng) = ctx.split();
        let before = lattice.count_sources();
        let side = lattice.side();
        let mut visits = 0;

        for (i, v) in lattice.values_mut().iter_mut().enumerate() {
            let coord = (i / side, i % side);
            if coord == anchor || *v == SOURCE {
                continue;
            }
            let alpha = rng.triangular();
            *v += multiplier * (-alpha / space.distance(anchor, coord));
            visits += 1;
        }

        let clamped = lattice.clamp_negative();
        Ok(StepReport {
            visits,
            clamped,
            converted: converted_since(lattice, before),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sway_core::{Lattice, TickId};
    use sway_propagator::StepParams;
    use sway_space::{EdgeBehavior, Square8};
    use sway_test_utils::{filled_lattice, ScriptedRandom};

    fn params() -> StepParams {
        StepParams {
            source_strength: 1.0,
            decay_constant: 1.0,
            time_index: 0,
        }
    }

    fn run(strategy: &FieldDecay, lattice: &mut Lattice, rng: &mut ScriptedRandom) -> StepReport {
        let space = Square8::new(lattice.side(), EdgeBehavior::Absorb).unwrap();
        let mut ctx = StepContext::new(lattice, &space, rng, TickId(0), params());
        strategy.apply(&mut ctx).unwrap()
    }

    #[test]
    fn touches_every_non_source_cell() {
        let mut lattice = filled_lattice(4, 5.0, &[(1, 1), (3, 3)]);
        let mut rng = ScriptedRandom::constant(0.5);
        let report = run(&FieldDecay::new(), &mut lattice, &mut rng);
        assert_eq!(report.visits, 14);
        assert_eq!(rng.triangular_draws(), 14);
    }

    #[test]
    fn anchor_row_and_column_are_updated() {
        let mut lattice = filled_lattice(5, 5.0, &[(2, 2)]);
        let mut rng = ScriptedRandom::constant(0.5);
        run(&FieldDecay::new(), &mut lattice, &mut rng);
        assert!((lattice.get(2, 0).unwrap() - 4.75).abs() < 1e-12);
        assert!((lattice.get(0, 2).unwrap() - 4.75).abs() < 1e-12);
        assert!((lattice.get(2, 3).unwrap() - 4.5).abs() < 1e-12);
        let corner = 5.0 - 0.5 / 8.0f64.sqrt();
        assert!((lattice.get(0, 0).unwrap() - corner).abs() < 1e-12);
    }

    #[test]
    fn no_sources_is_noop() {
        let mut lattice = filled_lattice(3, 0.7, &[]);
        let before = lattice.clone();
        let mut rng = ScriptedRandom::constant(0.5);
        let report = run(&FieldDecay::new(), &mut lattice, &mut rng);
        assert_eq!(report, StepReport::default());
        assert_eq!(lattice, before);
        assert_eq!(rng.triangular_draws(), 0);
    }

    #[test]
    fn fixed_anchor_need_not_be_a_source() {
        let mut lattice = filled_lattice(3, 0.4, &[]);
        let mut rng = ScriptedRandom::constant(1.0);
        let report = run(&FieldDecay::anchored_at((0, 0)), &mut lattice, &mut rng);
        assert_eq!(report.visits, 8);
        assert_eq!(lattice.get(0, 0), Some(0.4));
        assert_eq!(lattice.get(0, 1), Some(0.0));
        assert_eq!(lattice.get(1, 1), Some(0.0));
        assert!((lattice.get(2, 2).unwrap() - (0.4 - 1.0 / 8.0f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn anchor_outside_lattice_is_rejected() {
        let mut lattice = filled_lattice(3, 0.4, &[(0, 0)]);
        let space = Square8::new(3, EdgeBehavior::Absorb).unwrap();
        let mut rng = ScriptedRandom::constant(0.5);
        let mut ctx = StepContext::new(&mut lattice, &space, &mut rng, TickId(0), params());
        let err = FieldDecay::anchored_at((5, 1)).apply(&mut ctx).unwrap_err();
        assert_eq!(err, StrategyError::AnchorOutOfBounds { row: 5, col: 1 });
    }
}
