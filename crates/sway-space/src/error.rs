//! Error types for space construction.

use std::fmt;

/// Errors arising from topology construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a space with zero cells.
    EmptySpace,
    /// A periodic grid needs at least 3 cells per side so that the 8
    /// neighbours of a cell are distinct and never include the cell itself.
    WrapTooSmall {
        /// The configured side length.
        side: usize,
    },
    /// The side length does not fit the signed offset arithmetic.
    DimensionTooLarge {
        /// The configured side length.
        side: usize,
        /// Maximum permitted side length.
        max: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::WrapTooSmall { side } => {
                write!(f, "wrap edges need side >= 3, got {side}")
            }
            Self::DimensionTooLarge { side, max } => {
                write!(f, "side {side} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
