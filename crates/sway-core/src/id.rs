//! Step identifiers and the [`Coord`] type alias.

use std::fmt;

/// Monotonically increasing step counter.
///
/// `TickId(k)` names the k-th completed strategy application of a run;
/// a freshly initialized lattice is at `TickId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A `(row, col)` cell coordinate on a square lattice.
pub type Coord = (usize, usize);
