//! Index generation.
//!
//! Walks a directory tree and streams the Markdown index straight to the
//! output file, one directory at a time.

use crate::walk::walk_directories;
use readme_index_core::{IndexConfig, IndexError, IndexWriter, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Result of generating an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexResult {
    /// Number of directories visited, the root included.
    pub directories: usize,

    /// Number of file lines written.
    pub files: usize,

    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

/// Writes a Markdown index of `root` to `output`.
///
/// The root is checked before the output is touched, so a missing root
/// leaves no file behind. After that the output is truncated and written
/// as the walk goes; a failure part way through leaves whatever was
/// written so far. If `output` lies inside `root` it lists itself.
///
/// # Example
///
/// ```no_run
/// use readme_index_walker::generate_index;
/// use std::path::Path;
///
/// let result = generate_index(Path::new("."), Path::new("README.md")).unwrap();
/// println!("Indexed {} files", result.files);
/// ```
pub fn generate_index(root: &Path, output: &Path) -> Result<IndexResult> {
    let start = Instant::now();

    info!("Indexing {} into {}", root.display(), output.display());

    ensure_directory(root)?;

    let file = File::create(output).map_err(|e| IndexError::write(output, e))?;
    let mut writer = IndexWriter::new(BufWriter::new(file));
    writer
        .write_header()
        .map_err(|e| IndexError::write(output, e))?;

    for visit in walk_directories(root) {
        writer
            .write_visit(&visit?)
            .map_err(|e| IndexError::write(output, e))?;
    }

    let directories = writer.directories_written();
    let files = writer.files_written();
    writer.finish().map_err(|e| IndexError::write(output, e))?;

    let duration = start.elapsed();
    info!(
        "Indexed {} files in {} directories in {:?}",
        files, directories, duration
    );

    Ok(IndexResult {
        directories,
        files,
        duration_ms: duration.as_millis() as u64,
    })
}

/// Runs [`generate_index`] with the paths from `config`.
pub fn generate_with_config(config: &IndexConfig) -> Result<IndexResult> {
    generate_index(&config.root_dir, &config.output_path)
}

fn ensure_directory(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(IndexError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(IndexError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(IndexError::read_dir(root, e)),
    }
}
