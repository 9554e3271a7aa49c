//! Source location tracking for error reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source code (line and column, both 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The location of the first character of a file.
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let loc = SourceLocation::new(3, 7);
        assert_eq!(format!("{}", loc), "line 3, column 7");
    }

    #[test]
    fn test_start() {
        assert_eq!(SourceLocation::start(), SourceLocation::new(1, 1));
    }
}
