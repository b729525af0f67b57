//! Line/column locations inside source text.
//!
//! Locations are only ever used for diagnostics. Nothing in the parser or the
//! emitter makes decisions based on them, apart from detecting whether two
//! tokens are separated by a line break.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line/column position in source text.
///
/// Columns count Unicode scalar values, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextLocation {
    pub line: u32,
    pub column: u32,
}

impl TextLocation {
    /// The location of the first character of any source text.
    pub const START: TextLocation = TextLocation { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        TextLocation { line, column }
    }

    /// The location one column to the right.
    pub const fn next_column(self) -> Self {
        TextLocation {
            line: self.line,
            column: self.column + 1,
        }
    }

    /// The location at the start of the following line.
    pub const fn next_line(self) -> Self {
        TextLocation {
            line: self.line + 1,
            column: 1,
        }
    }
}

impl Default for TextLocation {
    fn default() -> Self {
        TextLocation::START
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

#[cfg(test)]
#[path = "../tests/location.rs"]
mod tests;
