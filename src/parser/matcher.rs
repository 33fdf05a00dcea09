//! The matcher protocol
//!
//! Everything that can attempt to consume input implements [`Matcher`]. The
//! four shapes a grammar is written in map onto it as follows:
//!
//! | Shape              | Rust form                                           |
//! |--------------------|-----------------------------------------------------|
//! | single rune        | `char`                                              |
//! | literal string     | `&str`, `String`                                    |
//! | predicate function | [`predicate`] around a `fn`/closure                 |
//! | predicate object   | any type implementing [`Matcher`]                   |
//!
//! Rune classes (`'a'..='z'`, [`satisfy`]) and [`End`] come premade.
//! Combinators live in [`combinators`](super::combinators).
//!
//! ## Contract
//!
//! `check` returns the mark of the last rune matched (or the current mark
//! for a zero-width match) on success and `None` on failure. A failing
//! matcher is not required to rewind: a literal stops at its first mismatching
//! rune and a predicate may leave the cursor anywhere. Atomicity is the job of
//! the sequence and choice combinators.
//!
//! Predicates (functions and user-defined objects) only have to find the
//! mark. When one succeeds without moving past the mark it returned, the
//! engine jumps there and consumes that rune:
//!
//! ```text
//! fn lower(p: &mut Parser<'_>) -> Option<Cursor> {
//!     p.current()?.is_ascii_lowercase().then(|| p.mark())
//! }
//! ```
//!
//! Matchers that leave the cursor exactly where their match ends, like every
//! premade one here, say so through [`Matcher::positions_cursor`].

use std::ops::RangeInclusive;

use super::cursor::Cursor;
use super::engine::Parser;
use super::error::Expected;

pub trait Matcher {
    /// Attempt a match at the parser's cursor.
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor>;

    /// What this matcher wants to see, for diagnostics.
    fn expected(&self) -> Expected {
        Expected::Matcher(std::any::type_name::<Self>().to_string())
    }

    /// Whether a successful `check` already leaves the cursor where the match
    /// ends. When `false` the engine consumes through the returned mark unless
    /// the cursor has moved past it.
    fn positions_cursor(&self) -> bool {
        false
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        (**self).check(parser)
    }

    fn expected(&self) -> Expected {
        (**self).expected()
    }

    fn positions_cursor(&self) -> bool {
        (**self).positions_cursor()
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        (**self).check(parser)
    }

    fn expected(&self) -> Expected {
        (**self).expected()
    }

    fn positions_cursor(&self) -> bool {
        (**self).positions_cursor()
    }
}

impl Matcher for char {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        if parser.current() != Some(*self) {
            return None;
        }
        let mark = parser.mark();
        parser.next();
        Some(mark)
    }

    fn expected(&self) -> Expected {
        Expected::Rune(*self)
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

impl Matcher for str {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let mut last = parser.mark();
        for rune in self.chars() {
            if parser.current() != Some(rune) {
                return None;
            }
            last = parser.mark();
            parser.next();
        }
        Some(last)
    }

    fn expected(&self) -> Expected {
        Expected::Literal(self.to_string())
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

impl Matcher for String {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        self.as_str().check(parser)
    }

    fn expected(&self) -> Expected {
        self.as_str().expected()
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// Inclusive rune class, e.g. `'0'..='9'`.
impl Matcher for RangeInclusive<char> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let rune = parser.current()?;
        if !self.contains(&rune) {
            return None;
        }
        let mark = parser.mark();
        parser.next();
        Some(mark)
    }

    fn expected(&self) -> Expected {
        Expected::Range(*self.start(), *self.end())
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// A function with full control over the parser.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<F> {
    name: &'static str,
    function: F,
}

/// Wrap a function as a matcher. It may inspect and advance the parser freely
/// and reports success by returning the mark of the last rune it matched.
pub fn predicate<F>(function: F) -> Predicate<F>
where
    F: Fn(&mut Parser<'_>) -> Option<Cursor>,
{
    Predicate {
        name: "predicate",
        function,
    }
}

impl<F> Predicate<F> {
    /// Name used in diagnostics.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> Matcher for Predicate<F>
where
    F: Fn(&mut Parser<'_>) -> Option<Cursor>,
{
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        (self.function)(parser)
    }

    fn expected(&self) -> Expected {
        Expected::Matcher(self.name.to_string())
    }
}

/// A single rune accepted by a test function.
#[derive(Debug, Clone, Copy)]
pub struct Satisfy<F> {
    name: &'static str,
    test: F,
}

pub fn satisfy<F>(test: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy {
        name: "rune class",
        test,
    }
}

impl<F> Satisfy<F> {
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> Matcher for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let rune = parser.current()?;
        if !(self.test)(rune) {
            return None;
        }
        let mark = parser.mark();
        parser.next();
        Some(mark)
    }

    fn expected(&self) -> Expected {
        Expected::Matcher(self.name.to_string())
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// Succeeds only at end of data, consuming nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct End;

impl Matcher for End {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        parser.done().then(|| parser.mark())
    }

    fn expected(&self) -> Expected {
        Expected::End
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}
