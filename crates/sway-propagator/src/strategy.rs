//! The [`UpdateStrategy`] trait and [`StepReport`].
//!
//! Strategies are stateless operators applied once per step. Each one
//! mutates the lattice in place and must leave no negative cell behind.

use crate::context::StepContext;
use sway_core::StrategyError;

/// What a single strategy application did to the lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Number of neighbour writes performed.
    pub visits: usize,
    /// Number of cells rewritten by the clamp pass.
    pub clamped: usize,
    /// Number of cells that became sources during this step.
    pub converted: usize,
}

/// A swappable per-step update rule.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: the same lattice and the same random
///   draws produce identical output.
/// - `&self`: strategies are stateless; mutable state lives in the lattice.
/// - After `apply()` returns `Ok`, no cell holds a negative value and no
///   source cell has been given a non-zero value.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores the configured strategy as
/// `Box<dyn UpdateStrategy>`.
///
/// # Examples
///
/// A strategy that converts every cell of the first row:
///
/// ```
/// use sway_core::StrategyError;
/// use sway_propagator::{StepContext, StepReport, UpdateStrategy};
///
/// struct ConvertTopRow;
///
/// impl UpdateStrategy for ConvertTopRow {
///     fn name(&self) -> &str { "convert_top_row" }
///
///     fn apply(&self, ctx: &mut StepContext<'_>) -> Result<StepReport, StrategyError> {
///         let side = ctx.space().side();
///         let (lattice, _rng) = ctx.split();
///         let before = lattice.count_sources();
///         lattice.values_mut()[..side].fill(0.0);
///         Ok(StepReport {
///             visits: side,
///             clamped: 0,
///             converted: lattice.count_sources() - before,
///         })
///     }
/// }
///
/// assert_eq!(ConvertTopRow.name(), "convert_top_row");
/// ```
pub trait UpdateStrategy: Send + 'static {
    /// Human-readable name for error reporting and logs.
    fn name(&self) -> &str;

    /// Execute the strategy for one step.
    ///
    /// The [`StepContext`] lends the lattice, topology, random source,
    /// step index, and decay parameters.
    fn apply(&self, ctx: &mut StepContext<'_>) -> Result<StepReport, StrategyError>;
}
