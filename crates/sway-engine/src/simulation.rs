//! The simulation driver.
//!
//! [`Simulation`] owns the lattice, the topology, the seeded random
//! source, and the configured strategy. Construction fills the lattice;
//! [`run()`](Simulation::run) then steps until enough of the grid has
//! become sources or the step cap is reached.
//!
//! # Ownership model
//!
//! The lattice is owned by the simulation and lent to the strategy as
//! `&mut` for exactly one step at a time. [`run()`](Simulation::run)
//! consumes the simulation and hands the final lattice back in the
//! [`RunOutcome`].

use std::error::Error;
use std::fmt;
use std::time::Instant;

use sway_core::{CategoryCounts, InitError, Lattice, LatticeError, StrategyError, TickId};
use sway_propagator::{SeededRandom, StepContext, StepParams, UpdateStrategy};
use sway_snapshot::{NullSink, SnapshotError, SnapshotSink};
use sway_space::{SpaceError, Square8};

use crate::config::{ConfigError, SimConfig};
use crate::init::{initialize, InitReport};
use crate::metrics::StepMetrics;
use crate::observer::{NullObserver, Observer};

/// Name of the snapshot saved once the run ends.
pub const FINAL_SNAPSHOT: &str = "Final Population";

/// Name of the snapshot saved right after initialization.
pub fn initial_snapshot_name(coverage: f64) -> String {
    format!("Initial Population {coverage}")
}

// ── SimError ────────────────────────────────────────────────────

/// Errors from building or running a simulation.
#[derive(Debug)]
pub enum SimError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The topology could not be built.
    Space(SpaceError),
    /// The lattice could not be built.
    Lattice(LatticeError),
    /// The random fill failed.
    Init(InitError),
    /// A strategy rejected its step.
    Strategy {
        /// Name of the failing strategy.
        name: String,
        /// The underlying error.
        error: StrategyError,
    },
    /// A snapshot could not be saved.
    Snapshot(SnapshotError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Strategy { name, error } => write!(f, "strategy '{name}': {error}"),
            Self::Snapshot(e) => write!(f, "snapshot: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Lattice(e) => Some(e),
            Self::Init(e) => Some(e),
            Self::Strategy { error, .. } => Some(error),
            Self::Snapshot(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for SimError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<LatticeError> for SimError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<InitError> for SimError {
    fn from(e: InitError) -> Self {
        Self::Init(e)
    }
}

impl From<SnapshotError> for SimError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

// ── RunOutcome ──────────────────────────────────────────────────

/// How a run ended. Both variants carry the lattice as it stood.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// The source fraction reached the stop threshold.
    Converged {
        /// Steps executed.
        steps: u64,
        /// Final lattice.
        lattice: Lattice,
    },
    /// The step cap was reached first.
    DidNotConverge {
        /// Steps executed, equal to the cap.
        steps: u64,
        /// Lattice at the cap.
        lattice: Lattice,
    },
}

impl RunOutcome {
    /// Whether the run converged.
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    /// Steps executed.
    pub fn steps(&self) -> u64 {
        match self {
            Self::Converged { steps, .. } | Self::DidNotConverge { steps, .. } => *steps,
        }
    }

    /// The final lattice.
    pub fn lattice(&self) -> &Lattice {
        match self {
            Self::Converged { lattice, .. } | Self::DidNotConverge { lattice, .. } => lattice,
        }
    }

    /// Take the final lattice.
    pub fn into_lattice(self) -> Lattice {
        match self {
            Self::Converged { lattice, .. } | Self::DidNotConverge { lattice, .. } => lattice,
        }
    }
}

/// Summary passed to [`Observer::on_finished`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps executed.
    pub steps: u64,
    /// Whether the stop threshold was reached.
    pub converged: bool,
    /// Category counts of the final lattice.
    pub counts: CategoryCounts,
    /// Final source fraction.
    pub source_fraction: f64,
}

// ── Simulation ──────────────────────────────────────────────────

/// A single simulation run.
///
/// Generic over the [`Observer`] and [`SnapshotSink`] so callers can pass
/// `&mut` references and inspect them after the run.
///
/// # Example
///
/// ```
/// use sway_engine::{SimConfig, Simulation};
///
/// let config = SimConfig {
///     side: 10,
///     sources: vec![(5, 5)],
///     coverage: 0.3,
///     ..SimConfig::default()
/// };
/// let outcome = Simulation::new(config).unwrap().run().unwrap();
/// assert!(outcome.is_converged());
/// ```
pub struct Simulation<O = NullObserver, S = NullSink> {
    config: SimConfig,
    space: Square8,
    lattice: Lattice,
    rng: SeededRandom,
    strategy: Box<dyn UpdateStrategy>,
    observer: O,
    sink: S,
    tick: TickId,
    init_report: InitReport,
}

impl Simulation {
    /// Build and initialize a simulation with no observer and no
    /// persistence.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        Self::with_hooks(config, NullObserver, NullSink)
    }
}

impl<O: Observer, S: SnapshotSink> Simulation<O, S> {
    /// Build and initialize a simulation.
    ///
    /// Validates `config`, builds the topology and the lattice with its
    /// sources, seeds the random source, fills the lattice, reports to the
    /// observer, and saves the initial snapshot.
    pub fn with_hooks(config: SimConfig, mut observer: O, mut sink: S) -> Result<Self, SimError> {
        config.validate()?;
        let space = Square8::new(config.side, config.edge)?;
        let mut lattice = Lattice::with_sources(config.side, &config.sources)?;
        let mut rng = SeededRandom::new(config.seed);

        let init_report = initialize(&mut lattice, config.coverage, &mut rng, &config.init)?;
        observer.on_initialized(&init_report);
        sink.save(&lattice, &initial_snapshot_name(config.coverage))?;

        let strategy = config.strategy.build();
        Ok(Self {
            config,
            space,
            lattice,
            rng,
            strategy,
            observer,
            sink,
            tick: TickId::default(),
            init_report,
        })
    }

    /// Apply the strategy once.
    pub fn step_once(&mut self) -> Result<StepMetrics, SimError> {
        let start = Instant::now();
        let tick = self.tick;
        let params = StepParams {
            source_strength: self.config.source_strength,
            decay_constant: self.config.decay_constant,
            time_index: self.config.clock.time_index(tick.0),
        };

        let report = {
            let mut ctx =
                StepContext::new(&mut self.lattice, &self.space, &mut self.rng, tick, params);
            self.strategy
                .apply(&mut ctx)
                .map_err(|error| SimError::Strategy {
                    name: self.strategy.name().to_string(),
                    error,
                })?
        };
        self.tick = tick.next();

        let metrics = StepMetrics {
            tick,
            time_index: params.time_index,
            sources: self.lattice.count_sources(),
            converted: report.converted,
            visits: report.visits,
            clamped: report.clamped,
            source_fraction: self.lattice.source_fraction(),
            elapsed_us: start.elapsed().as_micros() as u64,
        };
        self.observer.on_step(&metrics);
        Ok(metrics)
    }

    /// Whether the source count has reached `stop_fraction * n²`.
    pub fn is_converged(&self) -> bool {
        self.lattice.count_sources() as f64
            >= self.config.stop_fraction * self.lattice.cell_count() as f64
    }

    /// Step until converged or until `max_steps` steps have run.
    ///
    /// The final snapshot is saved and the observer notified either way.
    pub fn run(mut self) -> Result<RunOutcome, SimError> {
        let converged = loop {
            if self.is_converged() {
                break true;
            }
            if self.tick.0 >= self.config.max_steps {
                break false;
            }
            self.step_once()?;
        };

        self.sink.save(&self.lattice, FINAL_SNAPSHOT)?;
        let steps = self.tick.0;
        self.observer.on_finished(&RunSummary {
            steps,
            converged,
            counts: self.lattice.count_by_category(),
            source_fraction: self.lattice.source_fraction(),
        });

        let lattice = self.lattice;
        Ok(if converged {
            RunOutcome::Converged { steps, lattice }
        } else {
            RunOutcome::DidNotConverge { steps, lattice }
        })
    }

    /// The current lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The validated configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The topology.
    pub fn space(&self) -> &Square8 {
        &self.space
    }

    /// Steps completed so far.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// What the random fill did.
    pub fn init_report(&self) -> &InitReport {
        &self.init_report
    }

    /// Name of the configured strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}
