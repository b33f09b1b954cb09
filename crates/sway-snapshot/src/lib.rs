//! Lattice persistence for Sway simulations.
//!
//! Snapshots are plain CSV tables, one grid row per line, written through
//! a [`SnapshotSink`]. [`lattice_hash`] gives a cheap fingerprint for
//! determinism checks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod csv;
pub mod error;
pub mod hash;
pub mod sink;

pub use csv::{read_csv, read_csv_file, write_csv};
pub use error::SnapshotError;
pub use hash::lattice_hash;
pub use sink::{CsvDirSink, MemorySink, NullSink, SnapshotSink};
