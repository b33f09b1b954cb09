//! Shared axis helpers for the square lattice.

use crate::edge::EdgeBehavior;

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved)` or `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: isize, len: usize, edge: EdgeBehavior) -> Option<usize> {
    let n = len as isize;
    if val >= 0 && val < n {
        return Some(val as usize);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some((((val % n) + n) % n) as usize),
    }
}

/// 1D distance along a single axis, accounting for wrap.
pub(crate) fn axis_distance(a: usize, b: usize, len: usize, edge: EdgeBehavior) -> f64 {
    let diff = a.abs_diff(b);
    match edge {
        EdgeBehavior::Wrap => diff.min(len - diff) as f64,
        EdgeBehavior::Absorb => diff as f64,
    }
}
