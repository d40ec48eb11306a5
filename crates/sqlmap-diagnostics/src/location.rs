//! Location tracking inside serialized query documents

use serde::{Deserialize, Serialize};
use std::fmt;

/// Line and column inside a serialized document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Create from a byte offset into the document text
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let (line, column) = offset_to_line_col(source, offset);
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a byte offset to line and column numbers
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_line_col() {
        let source = "{\n  \"function\": \"sum\"\n}";
        assert_eq!(offset_to_line_col(source, 0), (1, 1));
        assert_eq!(offset_to_line_col(source, 1), (1, 2));
        assert_eq!(offset_to_line_col(source, 2), (2, 1));
        assert_eq!(offset_to_line_col(source, 4), (2, 3));
    }

    #[test]
    fn test_location_display() {
        assert_eq!(SourceLocation::new(3, 14).to_string(), "3:14");
        assert_eq!(SourceLocation::from_offset("ab\ncd", 4).to_string(), "2:2");
    }
}
