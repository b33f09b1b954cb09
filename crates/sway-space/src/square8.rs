//! 2D square grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use smallvec::SmallVec;
use sway_core::Coord;

/// All 8 offsets as `(d_row, d_col)`: N, S, W, E, NW, NE, SW, SE.
///
/// This is the fixed visitation order for every per-neighbour loop.
pub const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// An in-bounds neighbour of some cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    /// Resolved row.
    pub row: usize,
    /// Resolved column.
    pub col: usize,
    /// Euclidean length of the offset: `1` for cardinal, `√2` for diagonal.
    pub distance: f64,
}

/// A square `side × side` grid with 8-connected neighbourhood.
///
/// Each cell has coordinate `(row, col)`. Neighbours include the four
/// cardinal directions plus four diagonals, reported in [`OFFSETS_8`]
/// order. Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Absorb**: edge cells have fewer neighbours (corners have 3, edges have 5)
/// - **Wrap**: periodic boundary (torus topology)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square8 {
    side: usize,
    edge: EdgeBehavior,
}

impl Square8 {
    /// Maximum side length: offsets are computed in `isize` and ranks in
    /// `usize`, so keep well clear of both.
    pub const MAX_SIDE: usize = i32::MAX as usize;

    /// Create a new grid with `side * side` cells and the given edge behavior.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `side` is 0,
    /// `Err(SpaceError::WrapTooSmall)` for a periodic grid narrower than 3, or
    /// `Err(SpaceError::DimensionTooLarge)` above [`MAX_SIDE`](Self::MAX_SIDE).
    pub fn new(side: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if side == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if side > Self::MAX_SIDE {
            return Err(SpaceError::DimensionTooLarge {
                side,
                max: Self::MAX_SIDE,
            });
        }
        if edge == EdgeBehavior::Wrap && side < 3 {
            return Err(SpaceError::WrapTooSmall { side });
        }
        Ok(Self { side, edge })
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side
    }

    /// Row-major rank of `(row, col)`, or `None` if out of bounds.
    pub fn canonical_rank(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.side + col)
    }

    /// The in-bounds 8-connected neighbours of `(row, col)`, in
    /// [`OFFSETS_8`] order. Offsets that leave the grid under
    /// [`EdgeBehavior::Absorb`] are skipped.
    pub fn neighbours(&self, row: usize, col: usize) -> SmallVec<[Neighbour; 8]> {
        let mut result = SmallVec::new();
        let (r, c) = (row as isize, col as isize);
        for (dr, dc) in OFFSETS_8 {
            let nr = grid2d::resolve_axis(r + dr, self.side, self.edge);
            let nc = grid2d::resolve_axis(c + dc, self.side, self.edge);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push(Neighbour {
                    row: nr,
                    col: nc,
                    distance: ((dr * dr + dc * dc) as f64).sqrt(),
                });
            }
        }
        result
    }

    /// Euclidean distance between two cells. Under
    /// [`EdgeBehavior::Wrap`] each axis takes the shorter way round.
    pub fn distance(&self, a: Coord, b: Coord) -> f64 {
        let dr = grid2d::axis_distance(a.0, b.0, self.side, self.edge);
        let dc = grid2d::axis_distance(a.1, b.1, self.side, self.edge);
        (dr * dr + dc * dc).sqrt()
    }
}
