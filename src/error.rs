//! Error kinds for building and rendering directory trees

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Debug, Error)]
pub enum TreeError {
    /// The base directory argument does not resolve to a directory.
    #[error("Path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// A directory could not be listed (permission denied, removed mid-walk, ...).
    #[error("cannot list '{}': {source}", path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry was constructed in violation of its structural invariants.
    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    /// A built tree could not be turned into a JSON report (e.g. a non-UTF-8 path).
    #[error("cannot serialize tree for '{}': {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The render grid has too few columns for the deepest entry.
    #[error("entry at depth {depth} does not fit in a grid of {columns} columns")]
    GridTooNarrow { depth: usize, columns: usize },
}

impl TreeError {
    pub(crate) fn enumeration(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Enumeration {
            path: path.into(),
            source,
        }
    }
}
