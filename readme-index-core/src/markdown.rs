//! Markdown rendering.
//!
//! Turns directory visits into the lines of the index. Each level of depth
//! is four spaces; directory links end in `/`, file links do not. The only
//! escaping done on link targets is space to `%20`.

use crate::visit::DirectoryVisit;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

/// First line of every index, followed by a blank line.
pub const HEADER: &str = "# Repository Index";

/// Spaces per level of nesting.
pub const INDENT_WIDTH: usize = 4;

/// Replaces each space with `%20`. Nothing else is escaped.
pub fn encode_spaces(target: &str) -> Cow<'_, str> {
    if target.contains(' ') {
        Cow::Owned(target.replace(' ', "%20"))
    } else {
        Cow::Borrowed(target)
    }
}

/// Leading whitespace for a line at `level`.
pub fn indent(level: usize) -> String {
    " ".repeat(INDENT_WIDTH * level)
}

/// `- [name](path/)` at `level`.
pub fn directory_line(level: usize, name: &str, path: &Path) -> String {
    let target = path.to_string_lossy();
    format!("{}- [{}]({}/)", indent(level), name, encode_spaces(&target))
}

/// `- [name](path)` at `level`.
pub fn file_line(level: usize, name: &str, path: &Path) -> String {
    let target = path.to_string_lossy();
    format!("{}- [{}]({})", indent(level), name, encode_spaces(&target))
}

/// Streams an index into any writer.
pub struct IndexWriter<W: Write> {
    inner: W,
    directories: usize,
    files: usize,
}

impl<W: Write> IndexWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            directories: 0,
            files: 0,
        }
    }

    /// Writes the title and the blank line after it.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.inner, "{}", HEADER)?;
        writeln!(self.inner)
    }

    /// Writes the directory's own line, then one line per file, one level
    /// deeper. A visit without a name gets no directory line.
    pub fn write_visit(&mut self, visit: &DirectoryVisit) -> io::Result<()> {
        if let Some(ref name) = visit.name {
            let line = directory_line(visit.level, name, &visit.path);
            writeln!(self.inner, "{}", line)?;
        }
        self.directories += 1;

        for file in &visit.files {
            let line = file_line(visit.level + 1, file, &visit.file_path(file));
            writeln!(self.inner, "{}", line)?;
            self.files += 1;
        }

        Ok(())
    }

    /// Directories written so far, including unnamed ones.
    pub fn directories_written(&self) -> usize {
        self.directories
    }

    /// File lines written so far.
    pub fn files_written(&self) -> usize {
        self.files
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(visits: &[DirectoryVisit]) -> String {
        let mut writer = IndexWriter::new(Vec::new());
        writer.write_header().unwrap();
        for visit in visits {
            writer.write_visit(visit).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_encode_spaces_only() {
        assert_eq!(encode_spaces("my file.txt"), "my%20file.txt");
        assert_eq!(encode_spaces("a  b"), "a%20%20b");
        assert_eq!(encode_spaces("q?x#y&z é"), "q?x#y&z%20é");
        assert!(matches!(encode_spaces("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_indent_is_four_spaces_per_level() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "    ");
        assert_eq!(indent(3).len(), 12);
    }

    #[test]
    fn test_empty_unnamed_root_is_header_only() {
        let output = render(&[DirectoryVisit::new(".", 0)]);
        assert_eq!(output, "# Repository Index\n\n");
    }

    #[test]
    fn test_root_files_are_one_level_deep() {
        let root = DirectoryVisit::new(".", 0).with_files(vec!["a.txt".into()]);
        let output = render(&[root]);
        assert_eq!(output, "# Repository Index\n\n    - [a.txt](./a.txt)\n");
    }

    #[test]
    fn test_nested_layout() {
        let visits = vec![
            DirectoryVisit::new(".", 0),
            DirectoryVisit::new("./dirA", 1).with_files(vec!["file1.txt".into()]),
            DirectoryVisit::new("./dirA/subdir", 2).with_files(vec!["file2.txt".into()]),
        ];

        let expected = "\
# Repository Index

    - [dirA](./dirA/)
        - [file1.txt](./dirA/file1.txt)
        - [subdir](./dirA/subdir/)
            - [file2.txt](./dirA/subdir/file2.txt)
";
        assert_eq!(render(&visits), expected);
    }

    #[test]
    fn test_spaces_encoded_in_target_not_text() {
        let dir = DirectoryVisit::new("./my dir", 1).with_files(vec!["my file.txt".into()]);
        let output = render(&[dir]);
        assert!(output.contains("    - [my dir](./my%20dir/)\n"));
        assert!(output.contains("        - [my file.txt](./my%20dir/my%20file.txt)\n"));
    }

    #[test]
    fn test_counts() {
        let mut writer = IndexWriter::new(Vec::new());
        writer
            .write_visit(&DirectoryVisit::new(".", 0).with_files(vec!["a".into(), "b".into()]))
            .unwrap();
        writer.write_visit(&DirectoryVisit::new("./sub", 1)).unwrap();
        assert_eq!(writer.directories_written(), 2);
        assert_eq!(writer.files_written(), 2);
    }
}
