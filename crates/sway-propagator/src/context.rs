//! Execution context passed to strategies during a step.
//!
//! [`StepContext`] lends mutable access to the lattice and the random
//! source, shared access to the topology, and the step parameters.

use sway_core::{Lattice, RandomSource, StrategyError, TickId};
use sway_space::Square8;

/// Decay parameters for one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    /// Influence strength of a source at `t = 0`.
    pub source_strength: f64,
    /// Time constant of the exponential falloff. Must be positive.
    pub decay_constant: f64,
    /// The `t` fed into the decay term for this step.
    pub time_index: u64,
}

impl StepParams {
    /// The shared multiplier `strength * exp(-t / decay_constant)`.
    pub fn multiplier(&self) -> f64 {
        self.source_strength * (-(self.time_index as f64) / self.decay_constant).exp()
    }

    /// Reject non-finite strength, negative strength, or a non-positive
    /// decay constant.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if !self.source_strength.is_finite() || self.source_strength < 0.0 {
            return Err(StrategyError::InvalidParameter {
                name: "source_strength",
                value: self.source_strength,
            });
        }
        if !self.decay_constant.is_finite() || self.decay_constant <= 0.0 {
            return Err(StrategyError::InvalidParameter {
                name: "decay_constant",
                value: self.decay_constant,
            });
        }
        Ok(())
    }
}

/// Execution context passed to each strategy's `apply()` method.
///
/// Uses `&mut dyn RandomSource` to keep the
/// [`UpdateStrategy`](crate::UpdateStrategy) trait object-safe while
/// supporting scripted draws in tests.
pub struct StepContext<'a> {
    lattice: &'a mut Lattice,
    space: &'a Square8,
    rng: &'a mut dyn RandomSource,
    tick_id: TickId,
    params: StepParams,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the engine, not by strategies directly.
    pub fn new(
        lattice: &'a mut Lattice,
        space: &'a Square8,
        rng: &'a mut dyn RandomSource,
        tick_id: TickId,
        params: StepParams,
    ) -> Self {
        Self {
            lattice,
            space,
            rng,
            tick_id,
            params,
        }
    }

    /// Read-only view of the lattice.
    pub fn lattice(&self) -> &Lattice {
        self.lattice
    }

    /// Mutable lattice and random source together, for strategies that
    /// draw while they write.
    pub fn split(&mut self) -> (&mut Lattice, &mut dyn RandomSource) {
        (&mut *self.lattice, &mut *self.rng)
    }

    /// Spatial topology. Outlives the borrow of the context.
    pub fn space(&self) -> &'a Square8 {
        self.space
    }

    /// Index of the step being executed.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Decay parameters for this step.
    pub fn params(&self) -> StepParams {
        self.params
    }

    /// Fail with `ShapeMismatch` unless lattice and topology agree on the
    /// side length, then validate the parameters.
    pub fn check(&self) -> Result<(), StrategyError> {
        if self.lattice.side() != self.space.side() {
            return Err(StrategyError::ShapeMismatch {
                lattice: self.lattice.side(),
                space: self.space.side(),
            });
        }
        self.params.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sway_space::EdgeBehavior;
    use sway_test_utils::ScriptedRandom;

    fn params(t: u64) -> StepParams {
        StepParams {
            source_strength: 2.0,
            decay_constant: 4.0,
            time_index: t,
        }
    }

    #[test]
    fn multiplier_decays_exponentially() {
        assert!((params(0).multiplier() - 2.0).abs() < 1e-12);
        assert!((params(4).multiplier() - 2.0 * (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_bad_decay() {
        let p = StepParams {
            decay_constant: 0.0,
            ..params(0)
        };
        assert!(matches!(
            p.validate(),
            Err(StrategyError::InvalidParameter {
                name: "decay_constant",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_nan_strength() {
        let p = StepParams {
            source_strength: f64::NAN,
            ..params(0)
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn context_exposes_parts() {
        let mut lattice = Lattice::with_sources(3, &[(1, 1)]).unwrap();
        let space = Square8::new(3, EdgeBehavior::Absorb).unwrap();
        let mut rng = ScriptedRandom::constant(0.5);
        let mut ctx = StepContext::new(&mut lattice, &space, &mut rng, TickId(7), params(1));

        assert_eq!(ctx.tick_id(), TickId(7));
        assert_eq!(ctx.space().side(), 3);
        assert!(ctx.check().is_ok());

        let (lattice, rng) = ctx.split();
        lattice.set(0, 0, 0.25).unwrap();
        assert_eq!(rng.triangular(), 0.5);
        assert_eq!(ctx.lattice().get(0, 0), Some(0.25));
    }

    #[test]
    fn check_detects_shape_mismatch() {
        let mut lattice = Lattice::new(4).unwrap();
        let space = Square8::new(3, EdgeBehavior::Absorb).unwrap();
        let mut rng = ScriptedRandom::constant(0.5);
        let ctx = StepContext::new(&mut lattice, &space, &mut rng, TickId(0), params(0));
        assert_eq!(
            ctx.check(),
            Err(StrategyError::ShapeMismatch {
                lattice: 4,
                space: 3
            })
        );
    }
}
