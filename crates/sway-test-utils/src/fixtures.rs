//! Reusable lattice fixtures.

use sway_core::{Coord, Lattice, SOURCE};

/// Build a lattice from literal rows. All rows must have the same length
/// as the number of rows.
///
/// # Panics
///
/// Panics if the rows do not form a non-empty square.
pub fn lattice_from_rows(rows: &[&[f64]]) -> Lattice {
    let side = rows.len();
    let cells: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Lattice::from_values(side, cells).expect("fixture rows must form a square")
}

/// A `side × side` lattice with every cell at `value` except `sources`,
/// which are set to `0.0`.
///
/// # Panics
///
/// Panics if `side` is 0 or a source lies outside the lattice.
pub fn filled_lattice(side: usize, value: f64, sources: &[Coord]) -> Lattice {
    let mut lattice =
        Lattice::from_values(side, vec![value; side * side]).expect("fixture side must be >= 1");
    for &(row, col) in sources {
        lattice
            .set(row, col, SOURCE)
            .expect("fixture source must lie inside the lattice");
    }
    lattice
}
