//! Source spans and line/column positions
//!
//! Tokens are stored inside the nodes that own them as [`Span`]s: a byte offset and a
//! length into the source text the tree was parsed from. A span never owns text; the
//! tracer slices the source with it when it reports a literal.
//!
//! [`LineIndex`] converts byte offsets into 1-based line:column [`Position`]s for
//! diagnostics.

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// A token location: byte offset and byte length into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
}

impl Span {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Byte offset one past the last byte of the token
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn range(&self) -> ByteRange<usize> {
        self.offset..self.end()
    }

    /// The source text covered by this span.
    ///
    /// Returns `None` when the span falls outside `source` or splits a UTF-8 sequence.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }
}

impl From<ByteRange<usize>> for Span {
    fn from(range: ByteRange<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}

/// A 1-based line:column position in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Fast conversion from byte offsets to line/column positions
pub struct LineIndex {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(byte_pos, _)| byte_pos + 1),
        );
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based position. Columns count bytes.
    pub fn position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line + 1, byte_offset - self.line_starts[line] + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
