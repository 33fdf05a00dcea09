//! Cursor snapshots ("marks")

use std::fmt;

use super::location::{LineState, Position};

/// An immutable snapshot of the parser at one rune.
///
/// A cursor remembers the rune it points at (`None` once the input is
/// exhausted), the byte offset of that rune and the position accounting
/// state, so that jumping back to it restores line/column tracking exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub(crate) rune: Option<char>,
    pub(crate) offset: usize,
    pub(crate) line: LineState,
}

impl Cursor {
    pub(crate) fn start(input: &str) -> Self {
        Self {
            rune: input.chars().next(),
            offset: 0,
            line: LineState::default(),
        }
    }

    /// The rune under the cursor, `None` at end of data.
    pub fn rune(&self) -> Option<char> {
        self.rune
    }

    /// Byte offset of the rune into the input buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        self.line.position
    }

    pub fn is_end(&self) -> bool {
        self.rune.is_none()
    }

    /// Byte offset just past the rune (equal to `offset` at end of data).
    pub(crate) fn end_offset(&self) -> usize {
        self.offset + self.rune.map_or(0, char::len_utf8)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rune {
            Some(rune) => write!(f, "U+{:04X}: {}", u32::from(rune), rune),
            None => write!(f, "EOD"),
        }
    }
}
