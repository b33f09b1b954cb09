//! Error types shared across the Sway workspace.
//!
//! Organized by subsystem: lattice construction, strategy execution,
//! and initialization. Driver-level errors wrap these in the engine crate.

use std::error::Error;
use std::fmt;

/// Errors from lattice construction and coordinate access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with side length 0.
    EmptyLattice,
    /// A coordinate lies outside `[0, side)` on some axis.
    CoordOutOfBounds {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
        /// Side length of the lattice.
        side: usize,
    },
    /// A flat buffer does not hold `side * side` values.
    ShapeMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice side must be at least 1"),
            Self::CoordOutOfBounds { row, col, side } => {
                write!(f, "cell ({row}, {col}) out of bounds for side {side}")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "expected {expected} cells, got {found}")
            }
        }
    }
}

impl Error for LatticeError {}

/// Errors from a single update-strategy application.
///
/// The update rules themselves cannot fail; these report a step that was
/// wired up inconsistently.
#[derive(Clone, Debug, PartialEq)]
pub enum StrategyError {
    /// The lattice and the topology passed in the step context disagree.
    ShapeMismatch {
        /// Side length of the lattice.
        lattice: usize,
        /// Side length of the topology.
        space: usize,
    },
    /// A step parameter is non-finite or out of its domain.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A configured anchor coordinate lies outside the lattice.
    AnchorOutOfBounds {
        /// Anchor row.
        row: usize,
        /// Anchor column.
        col: usize,
    },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { lattice, space } => {
                write!(f, "lattice side {lattice} does not match topology side {space}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid step parameter {name}: {value}")
            }
            Self::AnchorOutOfBounds { row, col } => {
                write!(f, "anchor ({row}, {col}) lies outside the lattice")
            }
        }
    }
}

impl Error for StrategyError {}

/// Errors from the one-time random fill of a fresh lattice.
#[derive(Clone, Debug, PartialEq)]
pub enum InitError {
    /// Coverage must be a finite fraction in `[0, 1]`.
    CoverageOutOfRange {
        /// The rejected coverage.
        value: f64,
    },
    /// The attempt budget ran out before both quotas were met.
    RetryBudgetExhausted {
        /// Total cell picks made.
        attempts: u64,
        /// Gullible cells assigned so far.
        gullible: usize,
        /// Tolerant cells assigned so far.
        tolerant: usize,
        /// Gullible quota.
        target_gullible: usize,
        /// Tolerant quota.
        target_tolerant: usize,
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoverageOutOfRange { value } => {
                write!(f, "coverage must be in [0, 1], got {value}")
            }
            Self::RetryBudgetExhausted {
                attempts,
                gullible,
                tolerant,
                target_gullible,
                target_tolerant,
            } => write!(
                f,
                "initialization gave up after {attempts} attempts: \
                 gullible {gullible}/{target_gullible}, tolerant {tolerant}/{target_tolerant}"
            ),
        }
    }
}

impl Error for InitError {}
