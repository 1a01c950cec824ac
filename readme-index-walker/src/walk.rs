//! Directory traversal.
//!
//! Visits directories top-down, depth-first, the way a README index reads:
//! a directory and its files come out before anything below it. Sibling
//! order is whatever the filesystem lists; nothing is sorted.

use readme_index_core::{DirectoryVisit, IndexError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Lazy iterator over every directory under a root, root first.
///
/// Each directory is listed exactly once. The root must be listable; a
/// directory below it that cannot be listed is logged and skipped, along
/// with everything under it.
pub struct DirectoryWalk {
    /// Directories still to visit, next one on top.
    pending: Vec<(PathBuf, usize)>,
}

/// Starts a walk at `root`.
///
/// Symlinked directories are reported as subdirectories of their parent but
/// never descended into. The root itself is followed if it is a link.
pub fn walk_directories(root: &Path) -> DirectoryWalk {
    DirectoryWalk {
        pending: vec![(root.to_path_buf(), 0)],
    }
}

impl Iterator for DirectoryWalk {
    type Item = Result<DirectoryVisit>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, level)) = self.pending.pop() {
            match list_directory(&path, level) {
                Ok(listing) => {
                    // Reversed so the first listed subdirectory is walked first
                    self.pending
                        .extend(listing.descend.into_iter().rev().map(|dir| (dir, level + 1)));
                    return Some(Ok(listing.visit));
                }
                Err(e) if level == 0 => return Some(Err(e)),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }
        None
    }
}

/// One directory's children, split for rendering and for descending.
struct Listing {
    visit: DirectoryVisit,
    descend: Vec<PathBuf>,
}

/// Lists the immediate children of one directory.
fn list_directory(path: &Path, level: usize) -> Result<Listing> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();
    let mut descend = Vec::new();

    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| walk_error(e, path))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            descend.push(entry.path().to_path_buf());
            subdirs.push(name);
        } else if is_linked_directory(&entry) {
            subdirs.push(name);
        } else {
            files.push(name);
        }
    }

    debug!(
        "Visited {} (level {}, {} dirs, {} files)",
        path.display(),
        level,
        subdirs.len(),
        files.len()
    );

    let visit = DirectoryVisit::new(path, level)
        .with_subdirs(subdirs)
        .with_files(files);
    Ok(Listing { visit, descend })
}

/// Links to directories count as directories; broken links are files.
fn is_linked_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_symlink() && entry.path().is_dir()
}

fn walk_error(err: walkdir::Error, fallback: &Path) -> IndexError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf());
    IndexError::read_dir(path, err.into())
}
