//! Run configuration.

use std::path::PathBuf;

/// Directory indexed when none is given.
pub const DEFAULT_ROOT_DIR: &str = ".";

/// Where the index is written when no output is given, relative to the
/// current working directory.
pub const DEFAULT_README_PATH: &str = "README.md";

/// The two parameters of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory to walk.
    pub root_dir: PathBuf,

    /// File the Markdown index is written to. Truncated if it exists.
    pub output_path: PathBuf,
}

impl IndexConfig {
    pub fn new(root_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_DIR, DEFAULT_README_PATH)
    }
}
