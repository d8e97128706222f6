//! Source position tracking
//!
//! Every region start and leaf fragment in the event stream carries the
//! location where it begins in the original template source. Locations are
//! immutable once assigned. IR nodes that are created synthetically (value
//! containers) have no explicit location; "undefined" is modeled as
//! `Option<SourceLocation>` on the node, never as a magic sentinel value.

use serde::Serialize;
use std::fmt;

/// A position in template source: absolute byte offset plus line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceLocation {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Fast conversion from byte offsets to full source locations.
///
/// Used by event producers (and test fixtures) to stamp locations onto
/// events; the lowering stage itself never recomputes positions.
pub struct LineIndex {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a full source location.
    pub fn location_at(&self, offset: usize) -> SourceLocation {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        let column = offset - self.line_starts[line];

        SourceLocation::new(offset, line, column)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
