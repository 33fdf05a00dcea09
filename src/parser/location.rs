//! Line and column accounting for the rune cursor
//!
//! Positions are 0-indexed in both dimensions and count runes, not bytes.
//!
//! ## Line endings
//!
//! Three conventions are recognised and may be freely mixed in one buffer:
//!
//! ```text
//! "\n"    Unix
//! "\r\n"  Windows
//! "\r"    classic Mac
//! ```
//!
//! Each terminator bumps the line exactly once. The decision is made when a
//! rune is consumed, with a single rune of lookahead:
//!
//! ```text
//! consumed  lookahead  effect
//! '\r'      '\n'       column + 1
//! '\r'      other      line + 1, column 0
//! '\n'      -          line + 1, column 0
//! other     -          column + 1
//! ```
//!
//! The `\r` of a Windows pair only moves the column; its `\n` then opens the
//! new line, so positions already handed out are never revised.

use serde::Serialize;
use std::fmt;

/// A position in the input (line and column, both 0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}

/// Position accounting state carried by every cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LineState {
    pub(crate) position: Position,
}

impl LineState {
    /// State after consuming `rune`, given the rune that follows it.
    pub(crate) fn consume(self, rune: char, lookahead: Option<char>) -> Self {
        let Position { line, column } = self.position;
        let position = match rune {
            '\r' if lookahead == Some('\n') => Position::new(line, column + 1),
            '\n' | '\r' => Position::new(line + 1, 0),
            _ => Position::new(line, column + 1),
        };
        Self { position }
    }
}
