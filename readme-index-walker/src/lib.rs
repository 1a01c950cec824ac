//! readme-index walker - directory traversal and index generation
//!
//! This crate handles the file system side of things:
//! - Walking a tree top-down, one directory at a time
//! - Sorting each directory's entries into subdirectories and files
//! - Streaming the rendered index to the output file
//!
//! Nothing is filtered. Hidden files, build output and ignored paths all
//! show up in the index.

mod indexer;
mod walk;

pub use indexer::{generate_index, generate_with_config, IndexResult};
pub use walk::{walk_directories, DirectoryWalk};
