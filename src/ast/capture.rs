//! Capture directives: matchers that build nodes
//!
//! A [`Capture`] wraps any matcher and, when it succeeds, leaves a node on the
//! parser's capture stack. What node depends on what the inner match captured:
//!
//! - nothing: a new leaf of the capture's kind holding the matched text (or
//!   `convert(text)` when a conversion is set);
//! - exactly one node: that node, untouched (nested captures are transparent);
//! - several nodes: a new parent of the capture's kind with those nodes as its
//!   children, in match order.
//!
//! Captures inside a combinator that later fails are discarded together with
//! the rest of that attempt, and so are captures made by an inner matcher that
//! fails.
//!
//! The text of a leaf runs from where the capture started through the returned
//! mark, stopping at the cursor, so a trailing lookahead adds nothing. A
//! zero-width match captures the empty string.

use serde_json::Value;

use crate::parser::{Cursor, Expected, Matcher, Parser};

/// Turns matched text into a leaf value.
pub type Convert = fn(&str) -> Value;

#[derive(Debug, Clone, Copy)]
pub struct Capture<M> {
    /// Type tag given to the node.
    pub kind: u32,
    /// The matcher whose match is captured.
    pub value: M,
    pub convert: Option<Convert>,
}

impl<M> Capture<M> {
    pub fn new(kind: u32, value: M) -> Self {
        Self {
            kind,
            value,
            convert: None,
        }
    }

    pub fn with_convert(mut self, convert: Convert) -> Self {
        self.convert = Some(convert);
        self
    }
}

impl<M: Matcher> Matcher for Capture<M> {
    fn check(&self, parser: &mut Parser<'_>) -> Option<Cursor> {
        let depth = parser.captured().len();
        let start = parser.checkpoint();
        let Some(mark) = parser.check(&self.value) else {
            parser.discard_captures(start);
            return None;
        };

        let mut inner = parser.take_captures(depth);
        let node = match inner.len() {
            0 => {
                let text = matched_text(parser, start.cursor(), mark);
                let value = match self.convert {
                    Some(convert) => convert(text),
                    None => Value::String(text.to_string()),
                };
                parser.tree_mut().add_leaf(self.kind, value)
            }
            1 => inner.remove(0),
            _ => {
                let tree = parser.tree_mut();
                let parent = tree.add_parent(self.kind);
                for child in inner {
                    tree.set_last(parent, child);
                }
                parent
            }
        };
        parser.push_capture(node);
        Some(mark)
    }

    fn expected(&self) -> Expected {
        self.value.expected()
    }

    fn positions_cursor(&self) -> bool {
        true
    }
}

/// Input from `start` through `mark`, cut off at the cursor. Empty when the
/// match made no progress or ended before it began.
fn matched_text<'a>(parser: &Parser<'a>, start: Cursor, mark: Cursor) -> &'a str {
    let end = mark.end_offset().min(parser.mark().offset());
    parser.source().get(start.offset()..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{min_one, predicate, And, Ensure, Not, Or};

    #[test]
    fn test_leaf_holds_matched_text() {
        let mut parser = Parser::from_source("abc");
        assert!(parser.check(Capture::new(4, "ab")).is_some());
        let ast = parser.into_ast();
        let root = ast.roots().next().unwrap();
        assert_eq!(root.kind(), 4);
        assert_eq!(root.value(), Some(&Value::from("ab")));
    }

    #[test]
    fn test_convert_is_applied() {
        let mut parser = Parser::from_source("1234");
        let number = Capture::new(1, min_one('0'..='9'))
            .with_convert(|text| text.parse::<u64>().map_or(Value::Null, Value::from));
        assert!(parser.check(number).is_some());
        let ast = parser.into_ast();
        assert_eq!(ast.roots().next().unwrap().value(), Some(&Value::from(1234u64)));
    }

    #[test]
    fn test_single_inner_capture_is_transparent() {
        let mut parser = Parser::from_source("ab");
        assert!(parser.check(Capture::new(9, Capture::new(1, "ab"))).is_some());
        assert_eq!(parser.captured().len(), 1);
        assert_eq!(parser.tree().len(), 1);
        let root = parser.captured()[0];
        assert_eq!(parser.tree().node(root).kind(), 1);
    }

    #[test]
    fn test_multiple_inner_captures_become_children() {
        let mut parser = Parser::from_source("ab");
        let pair = Capture::new(2, And((Capture::new(0, 'a'), Capture::new(1, 'b'))));
        assert!(parser.check(pair).is_some());
        assert_eq!(parser.captured().len(), 1);

        let tree = parser.tree();
        let root = tree.get(parser.captured()[0]);
        assert_eq!(root.kind(), 2);
        assert!(root.is_parent());
        assert_eq!(root.value(), None);
        let kinds: Vec<u32> = root.children().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![0, 1]);
    }

    #[test]
    fn test_failed_alternative_leaves_no_nodes() {
        let mut parser = Parser::from_source("ac");
        let grammar = Or((
            And((Capture::new(0, 'a'), Capture::new(1, 'b'))),
            And((Capture::new(0, 'a'), Capture::new(2, 'c'))),
        ));
        assert!(parser.check(grammar).is_some());
        assert_eq!(parser.tree().len(), 2);
        let kinds: Vec<u32> = parser
            .captured()
            .iter()
            .map(|id| parser.tree().node(*id).kind())
            .collect();
        assert_eq!(kinds, vec![0, 2]);
    }

    #[test]
    fn test_failing_inner_matcher_drops_its_captures() {
        let mut parser = Parser::from_source("ab");
        let grammar = Capture::new(
            0,
            predicate(|p: &mut Parser<'_>| {
                p.check(Capture::new(1, 'a'));
                p.check('x')
            }),
        );
        assert!(parser.check(grammar).is_none());
        assert!(parser.captured().is_empty());
        assert!(parser.tree().is_empty());
        // The predicate is not rewound.
        assert_eq!(parser.current(), Some('b'));
    }

    #[test]
    fn test_leaf_text_ends_at_the_returned_mark() {
        // Consumes the closing quote but reports the rune before it.
        let body = predicate(|p: &mut Parser<'_>| {
            let mut last = None;
            while p.current()? != '"' {
                last = Some(p.mark());
                p.next();
            }
            p.next();
            last
        });
        let mut parser = Parser::from_source("ab\"");
        assert!(parser.check(Capture::new(0, body)).is_some());
        assert!(parser.done());
        let ast = parser.into_ast();
        assert_eq!(ast.roots().next().unwrap().value(), Some(&Value::from("ab")));
    }

    #[test]
    fn test_trailing_lookahead_and_zero_width_text() {
        let mut parser = Parser::from_source("ab");
        assert!(parser.check(Capture::new(0, And(('a', Not('x'))))).is_some());
        assert!(parser.check(Capture::new(1, Ensure('b'))).is_some());
        let ast = parser.into_ast();
        let values: Vec<&Value> = ast.roots().filter_map(|n| n.value()).collect();
        assert_eq!(values, vec![&Value::from("a"), &Value::from("")]);
    }

    #[test]
    fn test_predicate_moving_backwards_captures_nothing() {
        let mut parser = Parser::from_source("abc");
        let origin = parser.mark();
        parser.next().next();
        let rewind = predicate(move |p: &mut Parser<'_>| {
            p.jump(origin);
            Some(origin)
        });
        assert!(parser.check(Capture::new(0, rewind)).is_some());
        assert_eq!(parser.current(), Some('b'));
        let ast = parser.into_ast();
        assert_eq!(ast.roots().next().unwrap().value(), Some(&Value::from("")));
    }

    #[test]
    fn test_failed_capture_produces_nothing() {
        let mut parser = Parser::from_source("x");
        assert!(parser.check(Capture::new(0, 'a')).is_none());
        assert!(parser.captured().is_empty());
        assert!(parser.tree().is_empty());
    }
}
