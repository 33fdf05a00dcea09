//! # runeparse
//!
//! A rune-oriented parsing toolkit.
//!
//! A [`Parser`] walks a UTF-8 buffer one rune (Unicode code point) at a time
//! and keeps line/column positions for Unix, Windows and classic Mac line
//! endings, mixed freely. Grammars are written by composing [`Matcher`]s:
//! runes, literal strings, rune ranges, functions and objects, glued together
//! with sequence ([`And`]), ordered choice ([`Or`]) and repetition
//! ([`min_one`] and friends). Wrapping a matcher in a [`Capture`] turns its
//! matches into nodes of a doubly-linked [`Tree`], which serializes to nested
//! JSON arrays.
//!
//! ```rust,ignore
//! use runeparse::{ast, min_one, And, Capture};
//!
//! let grammar = And((min_one(Capture::new(0, 'a')), Capture::new(1, '\n')));
//! let ast = ast::parse(b"aaaaa\n", grammar)?;
//! assert_eq!(ast.to_json()?, r#"[[0,"a"],[0,"a"],[0,"a"],[0,"a"],[0,"a"],[1,"\n"]]"#);
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: cursor, position tracking, matcher protocol and combinators
//! - [`ast`]: node arena, capture directives and serialization
//!
//! A parse is single-threaded and owns its state; independent parses share
//! nothing but, possibly, the input buffer they borrow.

pub mod ast;
pub mod parser;

pub use ast::{parse, Ast, Capture, Convert, Node, NodeId, NodeRef, Tree, TypeNames};
pub use parser::{
    at_least, between, exactly, min_one, min_zero, optional, predicate, satisfy, And, Checkpoint,
    Cursor, End, Ensure, Expected, ExpectedParseError, Matcher, Matchers, Not, Or, ParseError,
    Parser, Position, Predicate, Repeat, Satisfy,
};
