//! One-time random fill of a fresh lattice.
//!
//! Unassigned cells are picked uniformly at random and given a
//! `Triangular(0, 1, 0.5)` value. Values above `0.5` fill the tolerant
//! quota, values in `(0, 0.5)` fill the gullible quota; anything else, or
//! a value whose band is already full, is rejected and retried.
//!
//! Once `fallback_after` rejections happen in a row, a rejected value is
//! mirrored to `1 - v`. The triangular law is symmetric about `0.5`, so
//! the mirrored value is just as likely and lands in the other band. The
//! whole fill is bounded by `attempts_per_cell * n²` cell picks.

use sway_core::{CategoryCounts, InitError, Lattice, RandomSource, GULLIBLE_MAX, UNASSIGNED};
use tracing::{debug, warn};

use crate::config::InitConfig;

/// How many cells of each band the fill aims for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuotaTargets {
    /// Gullible cells to assign.
    pub gullible: usize,
    /// Tolerant cells to assign.
    pub tolerant: usize,
}

impl QuotaTargets {
    /// Quotas for `lattice` at the given coverage.
    ///
    /// With `M = n² - 1` and `S` sources: `gullible = floor(M * coverage)`
    /// and `tolerant = M - S - gullible`, both capped so they fit in the
    /// unassigned cells.
    pub fn compute(lattice: &Lattice, coverage: f64) -> Self {
        let m = lattice.cell_count() - 1;
        let sources = lattice.count_sources();
        let free = lattice.count_unassigned();

        let gullible = ((m as f64 * coverage).floor() as usize).min(free);
        let tolerant = m
            .saturating_sub(sources)
            .saturating_sub(gullible)
            .min(free - gullible);
        Self { gullible, tolerant }
    }

    /// Cells the fill will assign in total.
    pub fn total(&self) -> usize {
        self.gullible + self.tolerant
    }
}

/// Outcome of a successful fill.
#[derive(Clone, Debug, PartialEq)]
pub struct InitReport {
    /// Quotas the fill aimed for and met.
    pub targets: QuotaTargets,
    /// Category counts of the filled lattice.
    pub counts: CategoryCounts,
    /// Cell picks made.
    pub attempts: u64,
    /// Draws accepted only after mirroring.
    pub mirrored: u64,
}

/// Fill the unassigned cells of `lattice` up to the quota targets.
///
/// Cells left over once both quotas are met stay at [`UNASSIGNED`] and
/// classify as neutral.
pub fn initialize(
    lattice: &mut Lattice,
    coverage: f64,
    rng: &mut dyn RandomSource,
    config: &InitConfig,
) -> Result<InitReport, InitError> {
    if !coverage.is_finite() || !(0.0..=1.0).contains(&coverage) {
        return Err(InitError::CoverageOutOfRange { value: coverage });
    }

    let sources = lattice.count_sources();
    if sources > 1 {
        warn!(
            sources,
            "tolerant quota reserves one cell per source; \
             single-source runs reserve exactly one"
        );
    }

    let targets = QuotaTargets::compute(lattice, coverage);
    let side = lattice.side();
    let budget = config
        .attempts_per_cell
        .saturating_mul(lattice.cell_count() as u64);

    let mut gullible = 0;
    let mut tolerant = 0;
    let mut attempts = 0u64;
    let mut mirrored = 0u64;
    let mut streak = 0u64;

    while gullible + tolerant < targets.total() {
        if attempts >= budget {
            return Err(InitError::RetryBudgetExhausted {
                attempts,
                gullible,
                tolerant,
                target_gullible: targets.gullible,
                target_tolerant: targets.tolerant,
            });
        }
        attempts += 1;

        let row = rng.index(side);
        let col = rng.index(side);
        let Some(i) = lattice.index_of(row, col) else {
            continue;
        };
        if lattice.values()[i] != UNASSIGNED {
            continue;
        }

        let fits = |v: f64, g: usize, t: usize| {
            (v > GULLIBLE_MAX && t < targets.tolerant)
                || (v > 0.0 && v < GULLIBLE_MAX && g < targets.gullible)
        };

        let mut v = rng.triangular();
        let mut flipped = false;
        if streak >= config.fallback_after && !fits(v, gullible, tolerant) {
            if streak == config.fallback_after {
                debug!(streak, "initializer switching to mirrored draws");
            }
            v = 1.0 - v;
            flipped = true;
        }

        if v > GULLIBLE_MAX && tolerant < targets.tolerant {
            tolerant += 1;
        } else if v > 0.0 && v < GULLIBLE_MAX && gullible < targets.gullible {
            gullible += 1;
        } else {
            streak += 1;
            continue;
        }
        lattice.values_mut()[i] = v;
        streak = 0;
        if flipped {
            mirrored += 1;
        }
    }

    Ok(InitReport {
        targets,
        counts: lattice.count_by_category(),
        attempts,
        mirrored,
    })
}
