//! Run diagnostics.
//!
//! The driver reports to an [`Observer`] after initialization, after
//! every step, and once the run ends. [`TracingObserver`] turns those
//! reports into `tracing` events.

use tracing::{debug, info};

use crate::init::InitReport;
use crate::metrics::StepMetrics;
use crate::simulation::RunSummary;

/// Receives progress reports from a [`Simulation`](crate::Simulation).
///
/// Every hook has an empty default, so implementors override only what
/// they need.
pub trait Observer {
    /// The lattice has been filled.
    fn on_initialized(&mut self, _report: &InitReport) {}

    /// One step has completed.
    fn on_step(&mut self, _metrics: &StepMetrics) {}

    /// The run has ended, converged or not.
    fn on_finished(&mut self, _summary: &RunSummary) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_initialized(&mut self, report: &InitReport) {
        (**self).on_initialized(report)
    }

    fn on_step(&mut self, metrics: &StepMetrics) {
        (**self).on_step(metrics)
    }

    fn on_finished(&mut self, summary: &RunSummary) {
        (**self).on_finished(summary)
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn on_initialized(&mut self, report: &InitReport) {
        (**self).on_initialized(report)
    }

    fn on_step(&mut self, metrics: &StepMetrics) {
        (**self).on_step(metrics)
    }

    fn on_finished(&mut self, summary: &RunSummary) {
        (**self).on_finished(summary)
    }
}

/// Ignores every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Emits `info` events for initialization and completion and a `debug`
/// event per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_initialized(&mut self, report: &InitReport) {
        info!(
            counts = %report.counts,
            attempts = report.attempts,
            mirrored = report.mirrored,
            "lattice initialized"
        );
    }

    fn on_step(&mut self, metrics: &StepMetrics) {
        debug!(
            tick = metrics.tick.0,
            t = metrics.time_index,
            sources = metrics.sources,
            converted = metrics.converted,
            fraction = metrics.source_fraction,
            elapsed_us = metrics.elapsed_us,
            "step"
        );
    }

    fn on_finished(&mut self, summary: &RunSummary) {
        info!(
            steps = summary.steps,
            converged = summary.converged,
            counts = %summary.counts,
            fraction = summary.source_fraction,
            "run finished"
        );
    }
}
