//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](SimConfig::validate)
//! checks every field in declaration order and reports the first problem.

use std::error::Error;
use std::fmt;

use sway_core::Coord;
use sway_propagator::UpdateStrategy;
use sway_propagators::{
    FieldDecay, GullibleSelection, MonteCarloSelection, NeighbourDiffusion, NeighbourRule,
    VisitOrder,
};
use sway_space::{EdgeBehavior, SpaceError, Square8};

// ── Clock ──────────────────────────────────────────────────────────

/// How the `t` of the decay term advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    /// Every step uses the same `t`.
    Fixed(u64),
    /// `t` is the number of completed steps: 0, 1, 2, ...
    Elapsed,
}

impl Default for Clock {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl Clock {
    /// The `t` for a step that follows `completed` finished steps.
    pub fn time_index(self, completed: u64) -> u64 {
        match self {
            Self::Fixed(t) => t,
            Self::Elapsed => completed,
        }
    }
}

// ── StrategyKind ───────────────────────────────────────────────────

/// Which update strategy the run applies every step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    /// [`NeighbourDiffusion`].
    Neighbour {
        /// How a visit combines with the neighbour's value.
        rule: NeighbourRule,
        /// Whether visits see each other's writes.
        order: VisitOrder,
    },
    /// [`FieldDecay`], optionally pinned to an anchor.
    FieldDecay {
        /// Fixed anchor; `None` uses the first source each step.
        anchor: Option<Coord>,
    },
    /// [`GullibleSelection`].
    Gullible,
    /// [`MonteCarloSelection`].
    MonteCarlo,
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::Neighbour {
            rule: NeighbourRule::default(),
            order: VisitOrder::default(),
        }
    }
}

impl StrategyKind {
    /// Instantiate the strategy.
    pub fn build(&self) -> Box<dyn UpdateStrategy> {
        match *self {
            Self::Neighbour { rule, order } => {
                Box::new(NeighbourDiffusion::builder().rule(rule).order(order).build())
            }
            Self::FieldDecay { anchor: Some(a) } => Box::new(FieldDecay::anchored_at(a)),
            Self::FieldDecay { anchor: None } => Box::new(FieldDecay::new()),
            Self::Gullible => Box::new(GullibleSelection::new()),
            Self::MonteCarlo => Box::new(MonteCarloSelection::new()),
        }
    }
}

// ── InitConfig ─────────────────────────────────────────────────────

/// Retry limits for the one-time random fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitConfig {
    /// Consecutive rejected draws after which a rejected value is
    /// mirrored to `1 - v`. Default: 1000.
    pub fallback_after: u64,
    /// Total cell picks allowed per lattice cell. Default: 1000. Minimum: 1.
    pub attempts_per_cell: u64,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            fallback_after: 1000,
            attempts_per_cell: 1000,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The side length cannot form a topology.
    Space(SpaceError),
    /// No source cells configured.
    NoSources,
    /// A source lies outside the grid.
    SourceOutOfBounds {
        /// Source row.
        row: usize,
        /// Source column.
        col: usize,
        /// Grid side.
        side: usize,
    },
    /// The same source is listed twice.
    DuplicateSource {
        /// Source row.
        row: usize,
        /// Source column.
        col: usize,
    },
    /// coverage is NaN, infinite, or outside `[0, 1]`.
    InvalidCoverage {
        /// The invalid value.
        value: f64,
    },
    /// source_strength is NaN, infinite, or negative.
    InvalidStrength {
        /// The invalid value.
        value: f64,
    },
    /// decay_constant is NaN, infinite, zero, or negative.
    InvalidDecay {
        /// The invalid value.
        value: f64,
    },
    /// stop_fraction is NaN, infinite, or outside `(0, 1]`.
    InvalidStopFraction {
        /// The invalid value.
        value: f64,
    },
    /// max_steps is zero.
    MaxStepsZero,
    /// The configured anchor lies outside the grid.
    AnchorOutOfBounds {
        /// Anchor row.
        row: usize,
        /// Anchor column.
        col: usize,
    },
    /// InitConfig invariant violated.
    InvalidInit {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::NoSources => write!(f, "at least one source is required"),
            Self::SourceOutOfBounds { row, col, side } => {
                write!(f, "source ({row}, {col}) lies outside the {side}x{side} grid")
            }
            Self::DuplicateSource { row, col } => {
                write!(f, "source ({row}, {col}) is listed more than once")
            }
            Self::InvalidCoverage { value } => {
                write!(f, "coverage must be in [0, 1], got {value}")
            }
            Self::InvalidStrength { value } => {
                write!(f, "source_strength must be finite and >= 0, got {value}")
            }
            Self::InvalidDecay { value } => {
                write!(f, "decay_constant must be finite and positive, got {value}")
            }
            Self::InvalidStopFraction { value } => {
                write!(f, "stop_fraction must be in (0, 1], got {value}")
            }
            Self::MaxStepsZero => write!(f, "max_steps must be at least 1"),
            Self::AnchorOutOfBounds { row, col } => {
                write!(f, "anchor ({row}, {col}) lies outside the grid")
            }
            Self::InvalidInit { reason } => write!(f, "invalid init config: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
///
/// The defaults reproduce the classic setup: a 100×100 grid seeded at
/// its centre, 10% gullible coverage, unit strength and decay, and a stop
/// once 90% of cells are sources.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid side length `n`. Default: 100.
    pub side: usize,
    /// Boundary handling. Default: absorb.
    pub edge: EdgeBehavior,
    /// Initial source cells. Default: the centre cell.
    pub sources: Vec<Coord>,
    /// Target fraction of gullible cells. Default: 0.1.
    pub coverage: f64,
    /// Influence strength at `t = 0`. Default: 1.0.
    pub source_strength: f64,
    /// Time constant of the exponential falloff. Default: 1.0.
    pub decay_constant: f64,
    /// Source fraction at which the run stops. Default: 0.9.
    pub stop_fraction: f64,
    /// Step cap. Default: 10 000.
    pub max_steps: u64,
    /// How `t` advances. Default: `Fixed(1)`.
    pub clock: Clock,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Update strategy. Default: neighbour diffusion.
    pub strategy: StrategyKind,
    /// Initializer retry limits.
    pub init: InitConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            side: 100,
            edge: EdgeBehavior::Absorb,
            sources: vec![(50, 50)],
            coverage: 0.1,
            source_strength: 1.0,
            decay_constant: 1.0,
            stop_fraction: 0.9,
            max_steps: 10_000,
            clock: Clock::default(),
            seed: 0,
            strategy: StrategyKind::default(),
            init: InitConfig::default(),
        }
    }
}

impl SimConfig {
    /// Validate all fields, in declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Side and edge must form a topology.
        Square8::new(self.side, self.edge)?;
        // 2. Sources: non-empty, in bounds, distinct.
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        for (i, &(row, col)) in self.sources.iter().enumerate() {
            if row >= self.side || col >= self.side {
                return Err(ConfigError::SourceOutOfBounds {
                    row,
                    col,
                    side: self.side,
                });
            }
            if self.sources[..i].contains(&(row, col)) {
                return Err(ConfigError::DuplicateSource { row, col });
            }
        }
        // 3. Coverage is a fraction.
        if !self.coverage.is_finite() || !(0.0..=1.0).contains(&self.coverage) {
            return Err(ConfigError::InvalidCoverage {
                value: self.coverage,
            });
        }
        // 4. Strength is finite and non-negative.
        if !self.source_strength.is_finite() || self.source_strength < 0.0 {
            return Err(ConfigError::InvalidStrength {
                value: self.source_strength,
            });
        }
        // 5. Decay constant is finite and positive.
        if !self.decay_constant.is_finite() || self.decay_constant <= 0.0 {
            return Err(ConfigError::InvalidDecay {
                value: self.decay_constant,
            });
        }
        // 6. Stop fraction in (0, 1].
        if !self.stop_fraction.is_finite() || self.stop_fraction <= 0.0 || self.stop_fraction > 1.0
        {
            return Err(ConfigError::InvalidStopFraction {
                value: self.stop_fraction,
            });
        }
        // 7. At least one step.
        if self.max_steps == 0 {
            return Err(ConfigError::MaxStepsZero);
        }
        // 8. A fixed anchor must be on the grid.
        if let StrategyKind::FieldDecay {
            anchor: Some((row, col)),
        } = self.strategy
        {
            if row >= self.side || col >= self.side {
                return Err(ConfigError::AnchorOutOfBounds { row, col });
            }
        }
        // 9. Initializer budget.
        if self.init.attempts_per_cell == 0 {
            return Err(ConfigError::InvalidInit {
                reason: "attempts_per_cell must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
