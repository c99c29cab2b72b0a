//! Source positions.
//!
//! A position is a `(line, column)` pair. Lines are 1-based and advance once
//! per physical input line; columns are 0-based and restart at every line.
//! Positions order lexicographically, line first.

use std::fmt;

/// Location of a single consumed character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Sentinel for tokens that were not read from the input.
    ///
    /// Both coordinates are invalid: line numbering starts at 1 and no line
    /// can reach `u32::MAX` columns.
    pub const SYNTHETIC: Position = Position {
        line: u32::MAX,
        column: u32::MAX,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Returns `true` for the [`SYNTHETIC`](Self::SYNTHETIC) sentinel.
    #[inline]
    pub const fn is_synthetic(self) -> bool {
        self.line == u32::MAX && self.column == u32::MAX
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_synthetic() {
            write!(f, "[line:-1,column:-1]")
        } else {
            write!(f, "[line:{},column:{}]", self.line, self.column)
        }
    }
}

#[cfg(test)]
mod tests;
