//! Spatial edge (boundary) behavior for the square lattice.

/// How the lattice handles neighbours that fall off its edges.
///
/// # Examples
///
/// ```
/// use sway_space::{EdgeBehavior, Square8};
///
/// // Absorb: a corner has 3 neighbours, an interior cell has 8.
/// let absorb = Square8::new(4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(0, 0).len(), 3);
/// assert_eq!(absorb.neighbours(1, 1).len(), 8);
///
/// // Wrap: every cell has exactly 8 neighbours (torus).
/// let wrap = Square8::new(4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(0, 0).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
}
