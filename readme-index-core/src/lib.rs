//! readme-index core - index model and Markdown rendering
//!
//! This crate knows how an index looks but not how to find one. It holds
//! the error type, the run configuration, the per-directory traversal
//! cursor, and the writer that renders visits as nested Markdown links.
//!
//! # Example
//!
//! ```
//! use readme_index_core::{DirectoryVisit, IndexWriter};
//!
//! let mut writer = IndexWriter::new(Vec::new());
//! writer.write_header().unwrap();
//! writer
//!     .write_visit(&DirectoryVisit::new(".", 0).with_files(vec!["a.txt".into()]))
//!     .unwrap();
//!
//! let text = String::from_utf8(writer.finish().unwrap()).unwrap();
//! assert_eq!(text, "# Repository Index\n\n    - [a.txt](./a.txt)\n");
//! ```

pub mod config;
pub mod error;
pub mod markdown;
pub mod visit;

pub use config::{IndexConfig, DEFAULT_README_PATH, DEFAULT_ROOT_DIR};
pub use error::{IndexError, Result};
pub use markdown::{encode_spaces, IndexWriter, HEADER, INDENT_WIDTH};
pub use visit::{basename, DirectoryVisit};
