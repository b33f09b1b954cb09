//! Simulation driver for Sway lattices.
//!
//! Provides [`SimConfig`] and its validation, the one-time random
//! [`initialize`] fill, and the [`Simulation`] run loop that applies the
//! configured strategy until the source fraction crosses the stop
//! threshold or the step cap is reached.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod init;
pub mod metrics;
pub mod observer;
pub mod simulation;

pub use config::{Clock, ConfigError, InitConfig, SimConfig, StrategyKind};
pub use init::{initialize, InitReport, QuotaTargets};
pub use metrics::StepMetrics;
pub use observer::{NullObserver, Observer, TracingObserver};
pub use simulation::{
    initial_snapshot_name, RunOutcome, RunSummary, SimError, Simulation, FINAL_SNAPSHOT,
};
