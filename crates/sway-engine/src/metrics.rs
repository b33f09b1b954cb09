//! Per-step metrics for the simulation driver.
//!
//! [`StepMetrics`] captures what one strategy application did and how
//! long it took.

use sway_core::TickId;

/// Counters and timing collected during a single step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Index of the step that produced these metrics.
    pub tick: TickId,
    /// The `t` fed into the decay term.
    pub time_index: u64,
    /// Source cells after the step.
    pub sources: usize,
    /// Cells that became sources during the step.
    pub converted: usize,
    /// Neighbour writes performed.
    pub visits: usize,
    /// Cells rewritten by the clamp pass.
    pub clamped: usize,
    /// `sources / n²` after the step.
    pub source_fraction: f64,
    /// Wall-clock time for the step, in microseconds.
    pub elapsed_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.tick, TickId(0));
        assert_eq!(m.sources, 0);
        assert_eq!(m.converted, 0);
        assert_eq!(m.visits, 0);
        assert_eq!(m.clamped, 0);
        assert_eq!(m.source_fraction, 0.0);
        assert_eq!(m.elapsed_us, 0);
    }
}
