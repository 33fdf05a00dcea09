//! Parse failures
//!
//! Two kinds of failure exist. An [`ExpectedParseError`] is an ordinary match
//! failure surfaced by [`Parser::expect`](super::Parser::expect); it carries
//! where matching stopped, what was expected there and what was found. A
//! [`ParseError::Encoding`] is raised once, when the input buffer is not valid
//! UTF-8, before any matching starts.

use serde::Serialize;
use std::fmt;
use std::str::Utf8Error;

use super::location::Position;

/// Description of what a matcher wanted to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expected {
    Rune(char),
    Literal(String),
    /// Inclusive rune class.
    Range(char, char),
    End,
    Sequence(Vec<Expected>),
    OneOf(Vec<Expected>),
    Repeat { min: usize, item: Box<Expected> },
    Not(Box<Expected>),
    /// A custom matcher, by name.
    Matcher(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Rune(rune) => write!(f, "{rune:?}"),
            Expected::Literal(text) => write!(f, "{text:?}"),
            Expected::Range(low, high) => write!(f, "{low:?}..={high:?}"),
            Expected::End => write!(f, "end of data"),
            Expected::Sequence(items) => write_joined(f, items, " then "),
            Expected::OneOf(items) => {
                write!(f, "one of ")?;
                write_joined(f, items, ", ")
            }
            Expected::Repeat { min, item } => write!(f, "at least {min} of {item}"),
            Expected::Not(item) => write!(f, "anything but {item}"),
            Expected::Matcher(name) => write!(f, "{name}"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Expected], separator: &str) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A failed expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedParseError {
    /// What the failing matcher wanted.
    pub expected: Expected,
    /// Input from where the attempt started through the rune at `position`.
    pub found: String,
    /// The furthest point the attempt reached.
    pub position: Position,
}

impl ExpectedParseError {
    pub fn new(expected: Expected, found: impl Into<String>, position: Position) -> Self {
        Self {
            expected,
            found: found.into(),
            position,
        }
    }
}

impl fmt::Display for ExpectedParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse conflict [{:02}:{:03}]: expected {} but got {:?}",
            self.position.line, self.position.column, self.expected, self.found
        )
    }
}

impl std::error::Error for ExpectedParseError {}

/// Errors that can occur while parsing a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not valid UTF-8
    Encoding(Utf8Error),
    /// The grammar did not match
    Expected(ExpectedParseError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Encoding(err) => write!(f, "invalid input encoding: {err}"),
            ParseError::Expected(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Encoding(err) => Some(err),
            ParseError::Expected(err) => Some(err),
        }
    }
}

impl From<Utf8Error> for ParseError {
    fn from(err: Utf8Error) -> Self {
        ParseError::Encoding(err)
    }
}

impl From<ExpectedParseError> for ParseError {
    fn from(err: ExpectedParseError) -> Self {
        ParseError::Expected(err)
    }
}
