//! Rune cursor and matching engine
//!
//! - **location**: line/column accounting across `\n`, `\r\n` and `\r`
//! - **cursor**: immutable marks of a point in the input
//! - **engine**: the [`Parser`] state and its `check`/`expect` entry points
//! - **matcher**: the [`Matcher`] protocol and the premade rune matchers
//! - **combinators**: sequence, ordered choice, repetition and lookahead
//! - **error**: [`ExpectedParseError`] and [`ParseError`]

pub mod combinators;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod location;
pub mod matcher;

pub use combinators::{
    at_least, between, exactly, min_one, min_zero, optional, And, Ensure, Matchers, Not, Or,
    Repeat,
};
pub use cursor::Cursor;
pub use engine::{Checkpoint, Parser};
pub use error::{Expected, ExpectedParseError, ParseError};
pub use location::Position;
pub use matcher::{predicate, satisfy, End, Matcher, Predicate, Satisfy};
