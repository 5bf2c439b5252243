//! Error types for reading, translating and reporting
use std::path::PathBuf;

use thiserror::Error;

/// Everything which can stop a run
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error without a known path
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file
    #[error("could not access {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line which does not hold a sequence and an abundance
    #[error("malformed record on line {line} ({reason}): {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// Fewer than two header lines were found before the end of the input
    #[error("expected 2 header lines, found {found}")]
    MissingHeaders { found: usize },

    /// Reading frames are 1-based
    #[error("invalid reading frame {0}, frames start at 1")]
    InvalidFrame(usize),

    /// Total abundance no longer fits in a u64
    #[error("total abundance overflowed on line {line}")]
    AbundanceOverflow { line: usize },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "python")]
impl From<Error> for pyo3::PyErr {
    fn from(err: Error) -> pyo3::PyErr {
        match err {
            Error::Io(_) | Error::File { .. } => {
                pyo3::exceptions::PyIOError::new_err(err.to_string())
            }
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}
