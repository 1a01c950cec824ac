//! Error types for indexing.
//!
//! Every variant carries the path it failed on, so the message alone is
//! enough to tell which file or directory the filesystem refused.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type for functions that can fail while building an index.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Things that can go wrong while walking a tree and writing its index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The root directory does not exist.
    #[error("root directory '{0}' does not exist")]
    RootNotFound(PathBuf),

    /// The root exists but is a file or something else.
    #[error("root '{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// A directory in the tree could not be read or listed.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write index '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Creates a directory read error with the path for context.
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Creates an output write error with the path for context.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
