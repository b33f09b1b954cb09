//! The square [`Lattice`] of per-agent influence values.

use crate::category::{classify, Category, CategoryCounts, SOURCE, UNASSIGNED};
use crate::error::LatticeError;
use crate::id::Coord;

/// An `n × n` grid of `f64` cell values, stored row-major.
///
/// The side length is fixed for the lifetime of the value. Cells are
/// never added or removed; only their values change. Categories are not
/// stored; every query re-derives them through [`classify`].
///
/// ```
/// use sway_core::{Category, Lattice};
///
/// let lattice = Lattice::with_sources(4, &[(1, 2)]).unwrap();
/// assert_eq!(lattice.count_sources(), 1);
/// assert_eq!(lattice.category_at(0, 0), Some(Category::Neutral));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    side: usize,
    cells: Vec<f64>,
}

impl Lattice {
    /// Create a lattice with every cell at [`UNASSIGNED`].
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if `side` is 0.
    pub fn new(side: usize) -> Result<Self, LatticeError> {
        if side == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        Ok(Self {
            side,
            cells: vec![UNASSIGNED; side * side],
        })
    }

    /// Create an unassigned lattice with the given cells set to [`SOURCE`].
    pub fn with_sources(side: usize, sources: &[Coord]) -> Result<Self, LatticeError> {
        let mut lattice = Self::new(side)?;
        for &(row, col) in sources {
            lattice.set(row, col, SOURCE)?;
        }
        Ok(lattice)
    }

    /// Wrap an existing row-major buffer of `side * side` values.
    pub fn from_values(side: usize, cells: Vec<f64>) -> Result<Self, LatticeError> {
        if side == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if cells.len() != side * side {
            return Err(LatticeError::ShapeMismatch {
                expected: side * side,
                found: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Side length `n`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells, `n²`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major index of `(row, col)`, or `None` if out of bounds.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.side && col < self.side).then(|| row * self.side + col)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn coord_of(&self, index: usize) -> Coord {
        (index / self.side, index % self.side)
    }

    /// Value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Overwrite the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), LatticeError> {
        let i = self.index_of(row, col).ok_or(LatticeError::CoordOutOfBounds {
            row,
            col,
            side: self.side,
        })?;
        self.cells[i] = value;
        Ok(())
    }

    /// Category of the cell at `(row, col)`, or `None` if out of bounds.
    pub fn category_at(&self, row: usize, col: usize) -> Option<Category> {
        self.get(row, col).map(classify)
    }

    /// All cell values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable access to all cell values in row-major order.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks_exact(self.side)
    }

    /// Coordinates of every source cell, in row-major order.
    pub fn sources(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == SOURCE)
            .map(|(i, _)| self.coord_of(i))
            .collect()
    }

    /// Scan every cell once and tally categories. The result sums to `n²`.
    pub fn count_by_category(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for &v in &self.cells {
            counts.record(classify(v));
        }
        counts
    }

    /// Number of source cells.
    pub fn count_sources(&self) -> usize {
        self.cells.iter().filter(|&&v| v == SOURCE).count()
    }

    /// Number of cells still at [`UNASSIGNED`].
    pub fn count_unassigned(&self) -> usize {
        self.cells.iter().filter(|&&v| v == UNASSIGNED).count()
    }

    /// Fraction of cells that are sources, in `[0, 1]`.
    pub fn source_fraction(&self) -> f64 {
        self.count_sources() as f64 / self.cell_count() as f64
    }

    /// Rewrite every negative cell to exactly [`SOURCE`].
    ///
    /// This is the only place a non-source cell becomes a source under the
    /// diffusion rules. Returns the number of cells rewritten.
    pub fn clamp_negative(&mut self) -> usize {
        let mut clamped = 0;
        for v in self.cells.iter_mut() {
            if *v < SOURCE {
                *v = SOURCE;
                clamped += 1;
            }
        }
        clamped
    }
}
