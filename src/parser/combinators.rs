//! Matcher combinators: sequence, ordered choice, repetition, lookahead
//!
//! Every combinator is itself a [`Matcher`], so they nest freely. All of them
//! are atomic: when one fails it rewinds the cursor and the capture stack to
//! where it started before reporting the failure.
//!
//! Element lists for [`And`] and [`Or`] are anything implementing
//! [`Matchers`]: tuples of up to eight matchers, arrays and vectors of one
//! matcher type, or `Vec<Box<dyn Matcher>>` for grammars assembled at run
//! time.
//!
//! ```text
//! And(("let", ' ', ident))             sequence
//! Or(('a'..='z', 'A'..='Z', '_'))      ordered choice, first match wins
//! min_one('0'..='9')                   one or more, greedy
//! ```

use tracing::trace;

use super::cursor::Cursor;
use super::engine::Parser;
use super::error::Expected;
use super::matcher::Matcher;

/// An ordered list of matchers.
pub trait Matchers {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Matcher>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn items<L: Matchers + ?Sized>(list: &L) -> impl Iterator<Item = &dyn Matcher> + '_ {
    (0..list.len()).filter_map(move |index| list.get(index))
}

fn describe<L: Matchers + ?Sized>(list: &L) -> Vec<Expected> {
    items(list).map(|matcher| matcher.expected()).collect()
}

macro_rules! impl_matchers_for_tuple {
    ($len:expr; $($name:ident $index:tt),+) => {
        impl<$($name: Matcher),+> Matchers for ($($name,)+) {
            fn len(&self) -> usize {
                $len
            }

            fn get(&self, index: usize) -> Option<&dyn Matcher> {
                match index {
                    $($index => Some(&self.$index),)+
                    _ => None,
                }
            }
        }
    };
}

impl_matchers_for_tuple!(1; A 0);
impl_matchers_for_tuple!(2; A 0, B 1);
impl_matchers_for_tuple!(3; A 0, B 1, C 2);
impl_matchers_for_tuple!(4; A 0, B 1, C 2, D 3);
impl_matchers_for_tuple!(5; A 0, B 1, C 2, D 3, E 4);
impl_matchers_for_tuple!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_matchers_for_tuple!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_matchers_for_tuple!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

impl<M: Matcher, const N: usize> Matchers for [M; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Matcher> {
        self.as_slice().get(index).map(|matcher| matcher as &dyn Matcher)
    }
}

impl<M: Matcher> Matchers for Vec<M> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&dyn Matcher> {
        self.as_slice().get(index).map(|matcher| matcher as &dyn Matcher)
    }
}

/// Sequence: every element must match, in order.
///
/// The result mark is the last element's. An empty sequence matches without
/// consuming anything.
#[derive(Debug, Clone, Copy)]
pub struct And<L>(pub L);

impl<L: Matchers> Matcher for And<L> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let checkpoint = parser.checkpoint();
        let mut last = parser.mark();
        for matcher in items(&self.0) {
            match parser.check(matcher) {
                Some(mark) => last = mark,
                None => {
                    parser.rewind(checkpoint);
                    return None;
                }
            }
        }
        Some(last)
    }

    fn expected(&self) -> Expected {
        Expected::Sequence(describe(&self.0))
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// Ordered choice: the first alternative that matches wins.
///
/// Each alternative starts from the same position. There is no backtracking
/// into an alternative once it has succeeded.
#[derive(Debug, Clone, Copy)]
pub struct Or<L>(pub L);

impl<L: Matchers> Matcher for Or<L> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let checkpoint = parser.checkpoint();
        for (index, alternative) in items(&self.0).enumerate() {
            if let Some(mark) = parser.check(alternative) {
                return Some(mark);
            }
            trace!(alternative = index, "backtracking");
            parser.rewind(checkpoint);
        }
        None
    }

    /// All alternatives, in the order they were tried.
    fn expected(&self) -> Expected {
        Expected::OneOf(describe(&self.0))
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// Greedy repetition between `min` and `max` (inclusive) times.
///
/// Successful iterations are kept; only the iteration that fails is undone.
/// When fewer than `min` iterations succeed the whole repetition rewinds.
/// An iteration that succeeds without consuming input would succeed the same
/// way every further time, so it ends the loop and satisfies `min`.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<M> {
    matcher: M,
    min: usize,
    max: Option<usize>,
}

impl<M> Repeat<M> {
    pub fn new(matcher: M, min: usize, max: Option<usize>) -> Self {
        Self { matcher, min, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

/// One or more.
pub fn min_one<M: Matcher>(matcher: M) -> Repeat<M> {
    Repeat::new(matcher, 1, None)
}

/// Zero or more.
pub fn min_zero<M: Matcher>(matcher: M) -> Repeat<M> {
    Repeat::new(matcher, 0, None)
}

/// Zero or one.
pub fn optional<M: Matcher>(matcher: M) -> Repeat<M> {
    Repeat::new(matcher, 0, Some(1))
}

pub fn exactly<M: Matcher>(count: usize, matcher: M) -> Repeat<M> {
    Repeat::new(matcher, count, Some(count))
}

pub fn at_least<M: Matcher>(min: usize, matcher: M) -> Repeat<M> {
    Repeat::new(matcher, min, None)
}

pub fn between<M: Matcher>(min: usize, max: usize, matcher: M) -> Repeat<M> {
    Repeat::new(matcher, min, Some(max))
}

impl<M: Matcher> Matcher for Repeat<M> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let start = parser.checkpoint();
        let mut last = None;
        let mut count = 0;

        while self.max.map_or(true, |max| count < max) {
            let iteration = parser.checkpoint();
            let Some(mark) = parser.check(&self.matcher) else {
                parser.rewind(iteration);
                break;
            };
            count += 1;
            last = Some(mark);
            if parser.mark().offset() == iteration.cursor().offset() {
                trace!(count, "zero-width iteration ends repetition");
                count = count.max(self.min);
                break;
            }
        }

        if count < self.min {
            parser.rewind(start);
            return None;
        }
        Some(last.unwrap_or_else(|| parser.mark()))
    }

    fn expected(&self) -> Expected {
        let item = self.matcher.expected();
        match self.min {
            0 | 1 => item,
            min => Expected::Repeat {
                min,
                item: Box::new(item),
            },
        }
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// Negative lookahead: succeeds, consuming nothing, when the inner matcher
/// fails here.
#[derive(Debug, Clone, Copy)]
pub struct Not<M>(pub M);

impl<M: Matcher> Matcher for Not<M> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let checkpoint = parser.checkpoint();
        let matched = parser.check(&self.0).is_some();
        parser.rewind(checkpoint);
        (!matched).then(|| parser.mark())
    }

    fn expected(&self) -> Expected {
        Expected::Not(Box::new(self.0.expected()))
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// Positive lookahead: succeeds, consuming nothing, when the inner matcher
/// matches here.
#[derive(Debug, Clone, Copy)]
pub struct Ensure<M>(pub M);

impl<M: Matcher> Matcher for Ensure<M> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let checkpoint = parser.checkpoint();
        let matched = parser.check(&self.0).is_some();
        parser.rewind(checkpoint);
        matched.then(|| parser.mark())
    }

    fn expected(&self) -> Expected {
        self.0.expected()
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}
