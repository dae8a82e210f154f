//! Conversion from byte offsets to 1-based line/column positions.
//!
//! Diagnostics carry byte [`Span`](crate::Span)s internally; a host editor
//! wants `(line, column)` to place its markers. [`LineIndex`] records where
//! every line starts so the conversion is a binary search plus a character
//! count within a single line.

use std::fmt;

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    /// The first character of the source.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position. Zero values are clamped to `1`.
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line start table for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    /// Build the index for `source`.
    pub fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// Number of lines in the source (an empty source has one line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a [`Position`].
    ///
    /// Offsets past the end are clamped to the end of the source, and offsets
    /// inside a multi-byte character resolve to that character.
    pub fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }

        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line_idx];
        let column = self.source[line_start..offset].chars().count() + 1;

        Position::new(line_idx + 1, column)
    }
}
