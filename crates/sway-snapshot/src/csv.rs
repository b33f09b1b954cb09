//! CSV encoding of a lattice.
//!
//! One grid row per line, values separated by commas, no header. Values
//! use the shortest representation that parses back to the same `f64`,
//! so a write followed by a read is bit-exact.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use sway_core::Lattice;

use crate::error::SnapshotError;

/// Write `lattice` as CSV.
pub fn write_csv<W: Write>(out: &mut W, lattice: &Lattice) -> io::Result<()> {
    for row in lattice.rows() {
        let mut first = true;
        for v in row {
            if !first {
                out.write_all(b",")?;
            }
            write!(out, "{v}")?;
            first = false;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Parse a CSV table into a lattice.
///
/// Blank lines are skipped. Every row must hold as many values as there
/// are rows.
pub fn read_csv<R: BufRead>(input: R) -> Result<Lattice, SnapshotError> {
    let mut cells = Vec::new();
    let mut width = None;
    let mut rows = 0;

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| SnapshotError::Malformed {
            line: line_no,
            detail: e.to_string(),
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let before = cells.len();
        for field in line.split(',') {
            let field = field.trim();
            let v: f64 = field.parse().map_err(|_| SnapshotError::Malformed {
                line: line_no,
                detail: format!("cannot parse {field:?} as a number"),
            })?;
            cells.push(v);
        }
        let len = cells.len() - before;
        match width {
            None => width = Some(len),
            Some(w) if w != len => {
                return Err(SnapshotError::Malformed {
                    line: line_no,
                    detail: format!("row has {len} values, expected {w}"),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    if let Some(w) = width {
        if w != rows {
            return Err(SnapshotError::Malformed {
                line: rows,
                detail: format!("table is {rows}x{w}, expected a square"),
            });
        }
    }
    Ok(Lattice::from_values(rows, cells)?)
}

/// Read a CSV snapshot from `path`.
pub fn read_csv_file(path: &Path) -> Result<Lattice, SnapshotError> {
    let file = File::open(path).map_err(|e| SnapshotError::io(path, e))?;
    read_csv(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sway_core::LatticeError;
    use sway_test_utils::lattice_from_rows;

    fn encode(lattice: &Lattice) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, lattice).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_rows_without_header() {
        let lattice = lattice_from_rows(&[&[0.0, 0.25], &[10000.0, 0.7]]);
        assert_eq!(encode(&lattice), "0,0.25\n10000,0.7\n");
    }

    #[test]
    fn reads_back_exact_bits() {
        let lattice = lattice_from_rows(&[&[0.1, 1.0 / 3.0], &[0.0, 0.5000000000000001]]);
        let back = read_csv(encode(&lattice).as_bytes()).unwrap();
        let bits = |l: &Lattice| l.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&back), bits(&lattice));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read_csv("0,1\n0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_non_square() {
        let err = read_csv("0,1,2\n0,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed { .. }));
    }

    #[test]
    fn rejects_bad_number() {
        let err = read_csv("0,x\n1,1\n".as_bytes()).unwrap_err();
        match err {
            SnapshotError::Malformed { line, detail } => {
                assert_eq!(line, 1);
                assert!(detail.contains("\"x\""));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_empty_lattice_error() {
        let err = read_csv("".as_bytes()).unwrap_err();
        assert!(matches!(err, SnapshotError::Lattice(LatticeError::EmptyLattice)));
    }

    #[test]
    fn blank_lines_and_spaces_are_tolerated() {
        let lattice = read_csv("0, 1\n\n 2 ,3\n".as_bytes()).unwrap();
        assert_eq!(lattice.values(), &[0.0, 1.0, 2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn round_trip_any_finite(side in 1usize..6, seed in prop::collection::vec(0.0f64..20000.0, 36)) {
            let cells = seed[..side * side].to_vec();
            let lattice = Lattice::from_values(side, cells).unwrap();
            let back = read_csv(encode(&lattice).as_bytes()).unwrap();
            prop_assert_eq!(back, lattice);
        }
    }
}
