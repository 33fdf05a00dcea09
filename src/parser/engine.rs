//! The parser state: a rune cursor over a borrowed buffer
//!
//! A [`Parser`] owns everything one parse mutates: the current cursor, the
//! furthest cursor reached (for diagnostics), the node arena and the capture
//! stack. The input itself is only borrowed.
//!
//! Movement is always one rune at a time with [`Parser::next`]; going back is
//! done by jumping to an earlier [`Cursor`]. Combinators that need
//! all-or-nothing semantics take a [`Checkpoint`], which additionally records
//! how many nodes were captured, and [`Parser::rewind`] to it on failure.

use tracing::debug;

use super::cursor::Cursor;
use super::error::{ExpectedParseError, ParseError};
use super::location::Position;
use super::matcher::Matcher;
use crate::ast::{Ast, NodeId, Tree};

/// Everything needed to undo a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    cursor: Cursor,
    captured: usize,
    nodes: usize,
}

impl Checkpoint {
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    cursor: Cursor,
    furthest: Cursor,
    tree: Tree,
    captured: Vec<NodeId>,
}

impl<'a> Parser<'a> {
    /// Create a parser over raw bytes, which must be valid UTF-8.
    pub fn new(input: &'a [u8]) -> Result<Self, ParseError> {
        let input = std::str::from_utf8(input).map_err(|err| {
            debug!(valid_up_to = err.valid_up_to(), "rejected input encoding");
            ParseError::Encoding(err)
        })?;
        Ok(Self::from_source(input))
    }

    pub fn from_source(input: &'a str) -> Self {
        debug!(bytes = input.len(), "created parser");
        let cursor = Cursor::start(input);
        Self {
            input,
            cursor,
            furthest: cursor,
            tree: Tree::default(),
            captured: Vec::new(),
        }
    }

    /// The whole input buffer.
    pub fn source(&self) -> &'a str {
        self.input
    }

    pub fn current(&self) -> Option<char> {
        self.cursor.rune
    }

    /// The rune after the current one.
    pub fn peek(&self) -> Option<char> {
        self.input[self.cursor.end_offset()..].chars().next()
    }

    /// The rune before the current one.
    pub fn look_back(&self) -> Option<char> {
        self.input[..self.cursor.offset].chars().next_back()
    }

    /// Advance one rune. At end of data this does nothing.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &mut Self {
        let Some(rune) = self.cursor.rune else {
            return self;
        };
        let offset = self.cursor.end_offset();
        let upcoming = self.input[offset..].chars().next();
        self.cursor = Cursor {
            rune: upcoming,
            offset,
            line: self.cursor.line.consume(rune, upcoming),
        };
        self.raise_furthest();
        self
    }

    pub fn mark(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor to a previously taken mark.
    pub fn jump(&mut self, mark: Cursor) -> &mut Self {
        self.cursor = mark;
        self.raise_furthest();
        self
    }

    /// The input from `start` through `end`, both runes included.
    ///
    /// # Panics
    ///
    /// When `end` lies before `start`.
    pub fn slice(&self, start: Cursor, end: Cursor) -> &'a str {
        &self.input[start.offset..end.end_offset()]
    }

    pub fn position(&self, mark: Cursor) -> Position {
        mark.position()
    }

    /// Whether the cursor has moved past the last rune.
    pub fn done(&self) -> bool {
        self.cursor.rune.is_none()
    }

    /// The furthest cursor any advance has reached so far.
    pub fn furthest(&self) -> Cursor {
        self.furthest
    }

    /// Try `matcher` at the cursor. Every matcher, at every nesting level, is
    /// dispatched through here.
    ///
    /// On success the cursor ends up past the returned mark: a predicate that
    /// returned a mark it has not moved past yet has that rune consumed for
    /// it. On failure the cursor is left wherever the matcher left it; only
    /// combinators rewind.
    pub fn check<M: Matcher>(&mut self, matcher: M) -> Option<Cursor> {
        let mark = matcher.check(self)?;
        if !matcher.positions_cursor() && self.cursor.offset <= mark.offset {
            self.jump(mark).next();
        }
        Some(mark)
    }

    /// Like [`Parser::check`], but a failure becomes an [`ExpectedParseError`]
    /// positioned at the furthest rune the attempt reached.
    pub fn expect<M: Matcher>(&mut self, matcher: M) -> Result<Cursor, ExpectedParseError> {
        let start = self.cursor;
        let previous = std::mem::replace(&mut self.furthest, start);
        let result = self.check(&matcher);
        let reached = self.furthest;
        if previous.offset > self.furthest.offset {
            self.furthest = previous;
        }

        result.ok_or_else(|| {
            let err = ExpectedParseError::new(
                matcher.expected(),
                self.slice(start, reached),
                reached.position(),
            );
            debug!(position = %err.position, expected = %err.expected, "expectation failed");
            err
        })
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.cursor,
            captured: self.captured.len(),
            nodes: self.tree.len(),
        }
    }

    /// Restore the cursor and drop every node captured since `checkpoint`.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.cursor;
        self.discard_captures(checkpoint);
    }

    /// Drop every node captured since `checkpoint`, leaving the cursor alone.
    pub(crate) fn discard_captures(&mut self, checkpoint: Checkpoint) {
        self.captured.truncate(checkpoint.captured);
        self.tree.truncate(checkpoint.nodes);
    }

    /// The node arena built so far.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Nodes captured at the top level, in match order.
    pub fn captured(&self) -> &[NodeId] {
        &self.captured
    }

    pub fn into_ast(self) -> Ast {
        Ast::new(self.tree, self.captured)
    }

    pub(crate) fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub(crate) fn push_capture(&mut self, node: NodeId) {
        self.captured.push(node);
    }

    /// Remove and return the captures above `depth`.
    pub(crate) fn take_captures(&mut self, depth: usize) -> Vec<NodeId> {
        self.captured.split_off(depth.min(self.captured.len()))
    }

    fn raise_furthest(&mut self) {
        if self.cursor.offset > self.furthest.offset {
            self.furthest = self.cursor;
        }
    }
}
