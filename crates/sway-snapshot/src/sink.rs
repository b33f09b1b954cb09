//! Destinations for named lattice snapshots.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sway_core::Lattice;

use crate::csv::write_csv;
use crate::error::SnapshotError;

/// Somewhere to put a named copy of the lattice.
///
/// The driver saves twice per run: once after initialization and once at
/// the end. Names are free text and may contain spaces.
pub trait SnapshotSink {
    /// Persist `lattice` under `name`.
    fn save(&mut self, lattice: &Lattice, name: &str) -> Result<(), SnapshotError>;
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn save(&mut self, lattice: &Lattice, name: &str) -> Result<(), SnapshotError> {
        (**self).save(lattice, name)
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn save(&mut self, lattice: &Lattice, name: &str) -> Result<(), SnapshotError> {
        (**self).save(lattice, name)
    }
}

/// Writes `<dir>/<name>.csv` for every save.
#[derive(Clone, Debug)]
pub struct CsvDirSink {
    dir: PathBuf,
}

impl CsvDirSink {
    /// Use `dir`, creating it if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| SnapshotError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a snapshot called `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }
}

impl SnapshotSink for CsvDirSink {
    fn save(&mut self, lattice: &Lattice, name: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(name);
        let file = File::create(&path).map_err(|e| SnapshotError::io(&path, e))?;
        let mut out = BufWriter::new(file);
        write_csv(&mut out, lattice).map_err(|e| SnapshotError::io(&path, e))?;
        out.flush().map_err(|e| SnapshotError::io(&path, e))
    }
}

/// Keeps every snapshot in memory, in save order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    saved: Vec<(String, Lattice)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent snapshot saved under `name`.
    pub fn get(&self, name: &str) -> Option<&Lattice> {
        self.saved
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, l)| l)
    }

    /// Snapshot names in save order.
    pub fn names(&self) -> Vec<&str> {
        self.saved.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of saves.
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    /// Whether nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

impl SnapshotSink for MemorySink {
    fn save(&mut self, lattice: &Lattice, name: &str) -> Result<(), SnapshotError> {
        self.saved.push((name.to_string(), lattice.clone()));
        Ok(())
    }
}

/// Discards every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn save(&mut self, _lattice: &Lattice, _name: &str) -> Result<(), SnapshotError> {
        Ok(())
    }
}
