//! Error types for snapshot persistence.

use std::fmt;
use std::io;
use std::path::PathBuf;

use sway_core::LatticeError;

/// Errors that can occur while saving or loading a snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    /// An I/O error occurred on the given path.
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A table could not be parsed.
    Malformed {
        /// 1-based line number of the offending row.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The parsed table is not a valid lattice.
    Lattice(LatticeError),
}

impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Malformed { line, detail } => write!(f, "malformed snapshot at line {line}: {detail}"),
            Self::Lattice(e) => write!(f, "invalid lattice: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Lattice(e) => Some(e),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<LatticeError> for SnapshotError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
