//! Source locations inside a project.

use std::path::PathBuf;

/// A range in a project file. Lines and columns are 1-indexed; columns
/// count characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Path relative to the project root.
    pub file: PathBuf,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Span {
    /// A span covering a whole line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            start_line: line,
            start_col: 1,
            end_line: line,
            end_col: usize::MAX,
        }
    }

    /// A span of `len` characters starting at `col` on `line`.
    pub fn at(file: impl Into<PathBuf>, line: usize, col: usize, len: usize) -> Self {
        Self {
            file: file.into(),
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col + len,
        }
    }

    /// A span covering the start of a file, for whole-file findings.
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self::line(file, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_span_covers_whole_line() {
        let span = Span::line("README.md", 10);
        assert_eq!(span.start_line, 10);
        assert_eq!(span.end_line, 10);
        assert_eq!(span.start_col, 1);
        assert_eq!(span.end_col, usize::MAX);
    }

    #[test]
    fn at_span_is_on_one_line() {
        let span = Span::at("setup.py", 3, 5, 15);
        assert_eq!(span.start_line, 3);
        assert_eq!(span.start_col, 5);
        assert_eq!(span.end_col, 20);
        assert_eq!(span.file, PathBuf::from("setup.py"));
    }
}
