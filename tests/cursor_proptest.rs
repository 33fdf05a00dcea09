//! Property-based tests for cursor movement and slicing
//!
//! Arbitrary text (including multi-byte runes and every line-ending
//! convention) must never panic the cursor, and positions and slices must
//! agree with a straightforward recount of the input.

use proptest::prelude::*;
use runeparse::{Parser, Position};

/// Text drawn from a small alphabet that is rich in line endings.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\n"),
            Just("\r\n"),
            Just("\r"),
            Just("a"),
            Just("é"),
            Just("①"),
            Just(" "),
        ],
        0..40,
    )
    .prop_map(|pieces| pieces.concat())
}

/// Line count of `text` when each of `\r\n`, `\n` and a lone `\r` ends a line.
fn count_lines(text: &str) -> usize {
    text.replace("\r\n", "\n").matches(['\n', '\r']).count()
}

proptest! {
    #[test]
    fn test_start_is_origin(text in text_strategy()) {
        let parser = Parser::from_source(&text);
        prop_assert_eq!(parser.mark().position(), Position::new(0, 0));
    }

    #[test]
    fn test_newlines_only_advance_lines(count in 0usize..30) {
        let text = "\n".repeat(count);
        let mut parser = Parser::from_source(&text);
        for line in 0..count {
            prop_assert_eq!(parser.mark().position(), Position::new(line, 0));
            parser.next();
        }
        prop_assert!(parser.done());
        prop_assert_eq!(parser.mark().position(), Position::new(count, 0));
    }

    #[test]
    fn test_walking_to_the_end(text in text_strategy()) {
        let mut parser = Parser::from_source(&text);
        let mut runes = String::new();
        while let Some(rune) = parser.current() {
            runes.push(rune);
            parser.next();
        }
        prop_assert_eq!(&runes, &text);
        prop_assert_eq!(parser.mark().offset(), text.len());
        prop_assert_eq!(parser.mark().position().line, count_lines(&text));
    }

    #[test]
    fn test_slice_matches_rune_range(text in text_strategy(), a in 0usize..40, b in 0usize..40) {
        let runes: Vec<char> = text.chars().collect();
        prop_assume!(!runes.is_empty());
        let (x, y) = (a % runes.len(), b % runes.len());
        let (from, to) = (x.min(y), x.max(y));

        let mut parser = Parser::from_source(&text);
        let mut marks = Vec::new();
        while !parser.done() {
            marks.push(parser.mark());
            parser.next();
        }

        let expected: String = runes[from..=to].iter().collect();
        prop_assert_eq!(parser.slice(marks[from], marks[to]), expected.as_str());
    }

    #[test]
    fn test_jump_back_replays_positions(text in text_strategy()) {
        let mut parser = Parser::from_source(&text);
        let start = parser.mark();
        let mut first = Vec::new();
        while !parser.done() {
            first.push(parser.mark());
            parser.next();
        }

        parser.jump(start);
        for mark in first {
            prop_assert_eq!(parser.mark(), mark);
            parser.next();
        }
    }
}
