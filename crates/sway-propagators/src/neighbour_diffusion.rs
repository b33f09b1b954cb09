//! Eight-neighbour influence diffusion.
//!
//! Each step snapshots the source cells in row-major order and visits
//! their in-bounds neighbours in [`OFFSETS_8`](sway_space::OFFSETS_8)
//! order. Every visit draws a fresh `α ~ Triangular(0, 1, 0.5)` and
//! computes the push
//!
//! ```text
//! delta = M(t) * (-α / d),   M(t) = strength * exp(-t / decay)
//! ```
//!
//! where `d` is 1 for cardinal and √2 for diagonal neighbours. A clamp
//! pass then rewrites every negative cell to `0.0`, which is how cells
//! become sources.
//!
//! Constructed via the builder pattern: [`NeighbourDiffusion::builder`].

use sway_core::{Lattice, StrategyError, SOURCE};
use sway_propagator::{StepContext, StepReport, UpdateStrategy};

/// How a visit combines the push with the neighbour's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighbourRule {
    /// `new = current + delta`. Influence accumulates over several steps.
    #[default]
    Decrement,
    /// `new = source + delta`. Any visit with `α > 0` converts the
    /// neighbour at the clamp.
    ReplaceFromSource,
}

impl NeighbourRule {
    fn combine(self, current: f64, delta: f64) -> f64 {
        match self {
            Self::Decrement => current + delta,
            Self::ReplaceFromSource => SOURCE + delta,
        }
    }
}

/// Whether visits within one step observe each other's writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitOrder {
    /// Visits are applied one after another; a later visit sees the value
    /// an earlier visit left behind.
    #[default]
    Sequential,
    /// All pushes are summed against the pre-step values and written in
    /// one pass. Draws are consumed in the same order as `Sequential`.
    Accumulated,
}

/// The core diffusion strategy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighbourDiffusion {
    rule: NeighbourRule,
    order: VisitOrder,
}

/// Builder for [`NeighbourDiffusion`].
///
/// Every setting has a default, so `NeighbourDiffusion::builder().build()`
/// is the stock decrement rule with sequential visits.
#[derive(Clone, Debug, Default)]
pub struct NeighbourDiffusionBuilder {
    rule: NeighbourRule,
    order: VisitOrder,
}

impl NeighbourDiffusion {
    /// Create a new builder.
    pub fn builder() -> NeighbourDiffusionBuilder {
        NeighbourDiffusionBuilder::default()
    }

    /// The configured neighbour rule.
    pub fn rule(&self) -> NeighbourRule {
        self.rule
    }

    /// The configured visit order.
    pub fn order(&self) -> VisitOrder {
        self.order
    }
}

impl NeighbourDiffusionBuilder {
    /// Set the neighbour rule (default: [`NeighbourRule::Decrement`]).
    pub fn rule(mut self, rule: NeighbourRule) -> Self {
        self.rule = rule;
        self
    }

    /// Set the visit order (default: [`VisitOrder::Sequential`]).
    pub fn order(mut self, order: VisitOrder) -> Self {
        self.order = order;
        self
    }

    /// Build the strategy.
    pub fn build(self) -> NeighbourDiffusion {
        NeighbourDiffusion {
            rule: self.rule,
            order: self.order,
        }
    }
}

impl UpdateStrategy for NeighbourDiffusion {
    fn name(&self) -> &str {
        "NeighbourDiffusion"
    }

    fn apply(&self, ctx: &mut StepContext<'_>) -> Result<StepReport, StrategyError> {
        ctx.check()?;
        let space = ctx.space();
        let multiplier = ctx.params().multiplier();
        let (lattice, rng) = ctx.split();

        let sources = lattice.sources();
        let before = sources.len();
        let side = lattice.side();
        let mut visits = 0;

        match self.order {
            VisitOrder::Sequential => {
                let cells = lattice.values_mut();
                for &(row, col) in &sources {
                    for nb in space.neighbours(row, col) {
                        let alpha = rng.triangular();
                        let delta = multiplier * (-alpha / nb.distance);
                        let i = nb.row * side + nb.col;
                        cells[i] = self.rule.combine(cells[i], delta);
                        visits += 1;
                    }
                }
            }
            VisitOrder::Accumulated => {
                // Per-cell summed push, None for cells nobody visited.
                let mut pushed: Vec<Option<f64>> = vec![None; lattice.cell_count()];
                for &(row, col) in &sources {
                    for nb in space.neighbours(row, col) {
                        let alpha = rng.triangular();
                        let delta = multiplier * (-alpha / nb.distance);
                        let slot = &mut pushed[nb.row * side + nb.col];
                        *slot = Some(slot.unwrap_or(0.0) + delta);
                        visits += 1;
                    }
                }
                let cells = lattice.values_mut();
                for (v, push) in cells.iter_mut().zip(pushed) {
                    if let Some(delta) = push {
                        *v = self.rule.combine(*v, delta);
                    }
                }
            }
        }

        let clamped = lattice.clamp_negative();
        Ok(StepReport {
            visits,
            clamped,
            converted: converted_since(lattice, before),
        })
    }
}

pub(crate) fn converted_since(lattice: &Lattice, before: usize) -> usize {
    lattice.count_sources().saturating_sub(before)
}
