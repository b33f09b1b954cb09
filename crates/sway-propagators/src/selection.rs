//! Single-conversion strategies.
//!
//! Both strategies pick one current source uniformly at random and
//! convert exactly one of its non-source neighbours per step. They differ
//! in how the neighbour is chosen.

use smallvec::SmallVec;
use sway_core::{classify, Category, Coord, Lattice, RandomSource, StrategyError, SOURCE};
use sway_propagator::{StepContext, StepReport, UpdateStrategy};
use sway_space::Square8;

/// Pick a source uniformly, returning `None` if there is none.
fn pick_source(lattice: &Lattice, rng: &mut dyn RandomSource) -> Option<Coord> {
    let sources = lattice.sources();
    if sources.is_empty() {
        return None;
    }
    Some(sources[rng.index(sources.len())])
}

/// In-bounds neighbours of `at` that are not sources, with their values.
fn candidates(lattice: &Lattice, space: &Square8, at: Coord) -> SmallVec<[(Coord, f64); 8]> {
    space
        .neighbours(at.0, at.1)
        .into_iter()
        .filter_map(|nb| {
            let v = lattice.get(nb.row, nb.col)?;
            (v != SOURCE).then_some(((nb.row, nb.col), v))
        })
        .collect()
}

fn convert(lattice: &mut Lattice, target: Option<Coord>) -> StepReport {
    let Some(i) = target.and_then(|(row, col)| lattice.index_of(row, col)) else {
        return StepReport::default();
    };
    let before = lattice.count_sources();
    lattice.values_mut()[i] = SOURCE;
    let clamped = lattice.clamp_negative();
    StepReport {
        visits: 1,
        clamped,
        converted: lattice.count_sources().saturating_sub(before),
    }
}

/// Convert one neighbour of a random source, preferring gullible cells.
///
/// Candidates are the in-bounds non-source neighbours. If any of them is
/// gullible the choice is uniform over the gullible ones, otherwise
/// uniform over all candidates. No candidates means no change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GullibleSelection;

impl GullibleSelection {
    /// Create the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl UpdateStrategy for GullibleSelection {
    fn name(&self) -> &str {
        "GullibleSelection"
    }

    fn apply(&self, ctx: &mut StepContext<'_>) -> Result<StepReport, StrategyError> {
        ctx.check()?;
        let space = ctx.space();
        let (lattice, rng) = ctx.split();

        let Some(source) = pick_source(lattice, rng) else {
            return Ok(StepReport::default());
        };
        let all = candidates(lattice, space, source);
        let gullible: SmallVec<[Coord; 8]> = all
            .iter()
            .filter(|&&(_, v)| classify(v) == Category::Gullible)
            .map(|&(c, _)| c)
            .collect();

        let target = if !gullible.is_empty() {
            Some(gullible[rng.index(gullible.len())])
        } else if !all.is_empty() {
            Some(all[rng.index(all.len())].0)
        } else {
            None
        };
        Ok(convert(lattice, target))
    }
}

/// Convert one neighbour of a random source, chosen with probability
/// proportional to its value.
///
/// Gullible neighbours are weighted first. If their total weight is zero
/// the tolerant neighbours are weighted instead. A draw `u * total` with
/// `u ~ U[0, 1)` selects the first neighbour, in offset order, whose
/// cumulative weight exceeds it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonteCarloSelection;

impl MonteCarloSelection {
    /// Create the strategy.
    pub fn new() -> Self {
        Self
    }

    fn weighted(all: &[(Coord, f64)], band: Category) -> (SmallVec<[(Coord, f64); 8]>, f64) {
        let picked: SmallVec<[(Coord, f64); 8]> = all
            .iter()
            .copied()
            .filter(|&(_, v)| classify(v) == band)
            .collect();
        let total = picked.iter().map(|&(_, w)| w).sum();
        (picked, total)
    }
}

impl UpdateStrategy for MonteCarloSelection {
    fn name(&self) -> &str {
        "MonteCarloSelection"
    }

    fn apply(&self, ctx: &mut StepContext<'_>) -> Result<StepReport, StrategyError> {
        ctx.check()?;
        let space = ctx.space();
        let (lattice, rng) = ctx.split();

        let Some(source) = pick_source(lattice, rng) else {
            return Ok(StepReport::default());
        };
        let all = candidates(lattice, space, source);

        let (mut pool, mut total) = Self::weighted(&all, Category::Gullible);
        if total <= 0.0 {
            (pool, total) = Self::weighted(&all, Category::Tolerant);
        }
        if total <= 0.0 {
            return Ok(StepReport::default());
        }

        let draw = rng.uniform() * total;
        let mut cumulative = 0.0;
        // Rounding can leave the draw at the very top; fall back to the last.
        let mut target = pool.last().map(|&(c, _)| c);
        for &(coord, weight) in &pool {
            cumulative += weight;
            if cumulative > draw {
                target = Some(coord);
                break;
            }
        }
        Ok(convert(lattice, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sway_core::TickId;
    use sway_propagator::StepParams;
    use sway_space::EdgeBehavior;
    use sway_test_utils::{filled_lattice, lattice_from_rows, ScriptedRandom};

    fn run(
        strategy: &dyn UpdateStrategy,
        lattice: &mut Lattice,
        rng: &mut ScriptedRandom,
    ) -> StepReport {
        let space = Square8::new(lattice.side(), EdgeBehavior::Absorb).unwrap();
        let params = StepParams {
            source_strength: 1.0,
            decay_constant: 1.0,
            time_index: 1,
        };
        let mut ctx = StepContext::new(lattice, &space, rng, TickId(0), params);
        strategy.apply(&mut ctx).unwrap()
    }

    // ---------------------------------------------------------------
    // GullibleSelection
    // ---------------------------------------------------------------

    #[test]
    fn gullible_neighbour_is_preferred() {
        let mut lattice = lattice_from_rows(&[
            &[0.9, 0.9, 0.9],
            &[0.9, 0.0, 0.9],
            &[0.9, 0.3, 0.9],
        ]);
        let mut rng = ScriptedRandom::constant(0.5);
        let report = run(&GullibleSelection::new(), &mut lattice, &mut rng);
        assert_eq!(report.converted, 1);
        assert_eq!(lattice.get(2, 1), Some(0.0));
        assert_eq!(lattice.count_sources(), 2);
    }

    #[test]
    fn falls_back_to_any_candidate() {
        let mut lattice = filled_lattice(3, 0.9, &[(0, 0)]);
        // Candidates of (0, 0) in offset order: S, E, SE.
        let mut rng = ScriptedRandom::constant(0.5).with_index(vec![0, 2]);
        run(&GullibleSelection::new(), &mut lattice, &mut rng);
        assert_eq!(lattice.get(1, 1), Some(0.0));
        assert_eq!(rng.index_draws(), 2);
    }

    #[test]
    fn surrounded_source_is_noop() {
        let mut lattice = lattice_from_rows(&[&[0.0, 0.0], &[0.0, 0.0]]);
        let mut rng = ScriptedRandom::constant(0.5);
        let report = run(&GullibleSelection::new(), &mut lattice, &mut rng);
        assert_eq!(report, StepReport::default());
    }

    #[test]
    fn no_sources_is_noop() {
        let mut lattice = filled_lattice(3, 0.3, &[]);
        let mut rng = ScriptedRandom::constant(0.5);
        let report = run(&GullibleSelection::new(), &mut lattice, &mut rng);
        assert_eq!(report, StepReport::default());
        assert_eq!(rng.index_draws(), 0);
    }

    // ---------------------------------------------------------------
    // MonteCarloSelection
    // ---------------------------------------------------------------

    #[test]
    fn cumulative_weight_selects_neighbour() {
        // Gullible neighbours of (1, 1) in offset order: N=0.1, S=0.3, W=0.2.
        let mut lattice = lattice_from_rows(&[
            &[0.9, 0.1, 0.9],
            &[0.2, 0.0, 0.9],
            &[0.9, 0.3, 0.9],
        ]);
        // total = 0.6, draw = 0.5 * 0.6 = 0.3; cumulative 0.1, 0.4 -> S.
        let mut rng = ScriptedRandom::constant(0.5);
        let report = run(&MonteCarloSelection::new(), &mut lattice, &mut rng);
        assert_eq!(report.converted, 1);
        assert_eq!(lattice.get(2, 1), Some(0.0));
        assert_eq!(lattice.get(0, 1), Some(0.1));
    }

    #[test]
    fn small_draw_selects_first() {
        let mut lattice = lattice_from_rows(&[
            &[0.9, 0.1, 0.9],
            &[0.2, 0.0, 0.9],
            &[0.9, 0.3, 0.9],
        ]);
        let mut rng = ScriptedRandom::constant(0.0);
        run(&MonteCarloSelection::new(), &mut lattice, &mut rng);
        assert_eq!(lattice.get(0, 1), Some(0.0));
    }

    #[test]
    fn tolerant_band_used_without_gullible() {
        let mut lattice = filled_lattice(3, 0.8, &[(0, 0)]);
        lattice.set(0, 1, 20.0).unwrap();
        let mut rng = ScriptedRandom::constant(0.99);
        let report = run(&MonteCarloSelection::new(), &mut lattice, &mut rng);
        assert_eq!(report.converted, 1);
        // Tolerant candidates: S=0.8, SE=0.8; draw 1.584 lands on SE.
        assert_eq!(lattice.get(1, 1), Some(0.0));
        assert_eq!(lattice.get(0, 1), Some(20.0));
    }

    #[test]
    fn neutral_only_neighbourhood_is_noop() {
        let mut lattice = filled_lattice(3, 50.0, &[(1, 1)]);
        let before = lattice.clone();
        let mut rng = ScriptedRandom::constant(0.5);
        let report = run(&MonteCarloSelection::new(), &mut lattice, &mut rng);
        assert_eq!(report, StepReport::default());
        assert_eq!(lattice, before);
    }
}
