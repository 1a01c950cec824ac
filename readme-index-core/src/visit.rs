//! Traversal cursor.
//!
//! A `DirectoryVisit` is what the walker hands the writer for each
//! directory: where it is, how deep it sits below the root, and the names
//! of its immediate children. It lives only as long as it takes to write
//! that directory's lines.

use std::path::{is_separator, Path, PathBuf};

/// One directory as seen during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryVisit {
    /// Path of the directory, as joined from the walk root.
    pub path: PathBuf,

    /// Number of components between the walk root and this directory.
    /// The root itself is level 0.
    pub level: usize,

    /// Basename shown in the index. `None` suppresses the directory line.
    pub name: Option<String>,

    /// Immediate subdirectories, in listing order.
    pub subdirs: Vec<String>,

    /// Immediate non-directory entries, in listing order.
    pub files: Vec<String>,
}

impl DirectoryVisit {
    /// Creates a visit with no children yet.
    pub fn new(path: impl Into<PathBuf>, level: usize) -> Self {
        let path = path.into();
        let name = basename(&path);
        Self {
            path,
            level,
            name,
            subdirs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Builder pattern: set file names.
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    /// Builder pattern: set subdirectory names.
    pub fn with_subdirs(mut self, subdirs: Vec<String>) -> Self {
        self.subdirs = subdirs;
        self
    }

    /// Path of a file in this directory, joined with the platform separator.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}

/// Final component of `path`, or `None` when it is empty.
///
/// The component is taken textually, after the last separator. It is empty
/// for `.`, a filesystem root, or a string ending in a separator. `..`
/// keeps its name.
pub fn basename(path: &Path) -> Option<String> {
    let raw = path.as_os_str().to_string_lossy();
    if raw == "." {
        return None;
    }

    raw.rsplit(is_separator)
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
