//! Capture-built trees and their JSON and text renderings

use runeparse::{
    ast, min_one, satisfy, And, Capture, End, Expected, Or, Parser, Tree, TypeNames,
};
use serde_json::Value;

fn number(text: &str) -> Value {
    text.parse::<u64>().map_or(Value::Null, Value::from)
}

#[test]
fn test_repeated_captures_are_siblings_at_the_top() {
    let grammar = And((min_one(Capture::new(0, 'a')), Capture::new(1, '\n')));
    let ast = ast::parse(b"aaaaa\n", grammar).unwrap();

    insta::assert_snapshot!(ast.to_json().unwrap(), @r#"[[0,"a"],[0,"a"],[0,"a"],[0,"a"],[0,"a"],[1,"\n"]]"#);
}

#[test]
fn test_nested_capture_becomes_parent() {
    let pair = Capture::new(2, And((Capture::new(0, 'a'), Capture::new(1, 'b'))));
    let ast = ast::parse(b"ab", pair).unwrap();

    insta::assert_snapshot!(ast.to_json().unwrap(), @r#"[[2,[[0,"a"],[1,"b"]]]]"#);
    insta::assert_snapshot!(ast.root().unwrap().to_json().unwrap(), @r#"[2,[[0,"a"],[1,"b"]]]"#);
}

#[test]
fn test_single_nested_capture_is_transparent() {
    let ast = ast::parse(b"ab", Capture::new(5, Capture::new(1, "ab"))).unwrap();
    assert_eq!(ast.to_json().unwrap(), r#"[[1,"ab"]]"#);
}

#[test]
fn test_converted_values_keep_their_type() {
    let key = Capture::new(0, min_one('a'..='z'));
    let value = Capture::new(1, min_one('0'..='9')).with_convert(number);
    let pair = Capture::new(3, And((key, '=', value, End)));
    let ast = ast::parse(b"x=42", pair).unwrap();

    insta::assert_snapshot!(ast.to_json().unwrap(), @r#"[[3,[[0,"x"],[1,42]]]]"#);

    let root = ast.root().unwrap();
    assert_eq!(root.to_string(), "[003]: [[000]: x, [001]: 42]");

    let names = TypeNames::new(["Key", "Value", "Unused", "Pair"]);
    assert_eq!(
        root.with_names(&names).to_string(),
        "[Pair]: [[Key]: x, [Value]: 42]"
    );
}

#[test]
fn test_strings_are_escaped() {
    let any = satisfy(|_| true).named("any rune");
    let ast = ast::parse("a\"\\\t".as_bytes(), Capture::new(0, min_one(any))).unwrap();
    assert_eq!(ast.to_json().unwrap(), r#"[[0,"a\"\\\t"]]"#);
}

#[test]
fn test_discarded_alternatives_do_not_serialize() {
    let grammar = Or((
        And((Capture::new(0, 'a'), Capture::new(1, 'b'))),
        And((Capture::new(0, 'a'), Capture::new(2, 'c'))),
    ));
    let ast = ast::parse(b"ac", grammar).unwrap();
    assert_eq!(ast.to_json().unwrap(), r#"[[0,"a"],[2,"c"]]"#);
    assert_eq!(ast.tree().len(), 2);
}

#[test]
fn test_no_captures_is_an_empty_list() {
    let ast = ast::parse(b"abc", "abc").unwrap();
    assert_eq!(ast.to_json().unwrap(), "[]");
    assert!(ast.root().is_none());
}

#[test]
fn test_captures_through_the_parser() {
    let mut parser = Parser::from_source("1,22");
    let item = Capture::new(7, min_one('0'..='9')).with_convert(number);
    assert!(parser.check(And((&item, ',', &item))).is_some());
    assert_eq!(parser.captured().len(), 2);
    assert_eq!(parser.into_ast().to_json().unwrap(), "[[7,1],[7,22]]");
}

#[test]
fn test_insertions_in_any_order() {
    let mut tree = Tree::new();
    let parent = tree.add_parent(9);
    let a = tree.add_leaf(0, "a");
    let b = tree.add_leaf(1, "b");
    let c = tree.add_leaf(2, "c");
    let d = tree.add_leaf(3, "d");

    tree.set_last(parent, b);
    tree.set_first(parent, a);
    tree.set_next(b, d);
    tree.set_previous(d, c);

    let forward: Vec<u32> = tree.children(parent).map(|n| n.kind()).collect();
    let backward: Vec<u32> = tree.children_rev(parent).map(|n| n.kind()).collect();
    assert_eq!(forward, vec![0, 1, 2, 3]);
    assert_eq!(backward, vec![3, 2, 1, 0]);
    assert_eq!(tree.node(parent).first_child(), Some(a));
    assert_eq!(tree.node(parent).last_child(), Some(d));

    insta::assert_snapshot!(tree.get(parent).to_json().unwrap(), @r#"[9,[[0,"a"],[1,"b"],[2,"c"],[3,"d"]]]"#);
}

#[test]
fn test_expected_serializes_for_tooling() {
    let expected = Expected::Sequence(vec![Expected::Literal("ab".into()), Expected::Rune('c')]);
    assert_eq!(
        serde_json::to_string(&expected).unwrap(),
        r#"{"Sequence":[{"Literal":"ab"},{"Rune":"c"}]}"#
    );
}
