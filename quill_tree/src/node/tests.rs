use std::sync::Arc;

use super::{Block, Character, DelimitedText, Infix, Natural, Node, Postfix, Prefix, Real, Tree};
use crate::{blob::Blob, text::Name, text::Text};

fn natural(value: u64) -> Node { Arc::new(Tree::Natural(Natural::new(0, value))) }

#[test]
fn test_leaf_queries() {
    let leaf = Tree::Natural(Natural::new(3, 42));
    assert_eq!(leaf.typename(), "natural");
    assert_eq!(leaf.arity(), 0);
    assert_eq!(leaf.children().count(), 0);
    assert_eq!(leaf.position(), 3);
}

#[test]
fn test_structural_queries() {
    let infix = Tree::Infix(Infix::new(0, Text::new(1, *b"+"), natural(1), natural(2)));
    assert_eq!(infix.typename(), "infix");
    assert_eq!(infix.arity(), 3);
    assert_eq!(infix.children().count(), 3);
    assert_eq!(infix.as_infix().unwrap().opcode().as_str(), "+");

    let prefix = Tree::Prefix(Prefix::new(
        0,
        Arc::new(Tree::Name(Name::new(0, *b"-"))),
        natural(5),
    ));
    assert_eq!(prefix.arity(), 2);
    assert_eq!(prefix.children().count(), 2);
}

#[test]
fn test_cast_accessors() {
    let leaf = Tree::Real(Real::new(0, 2.5));
    assert!(leaf.as_real().is_some());
    assert!(leaf.as_natural().is_none());
    assert!(leaf.as_infix().is_none());
}

#[test]
fn test_shared_children() {
    let shared = natural(7);
    let infix = Infix::new(
        0,
        Text::new(0, *b"+"),
        shared.clone(),
        shared.clone(),
    );

    assert!(Arc::ptr_eq(infix.left(), infix.right()));
    assert_eq!(Arc::strong_count(&shared), 3);
}

#[test]
fn test_deep_clone_is_independent() {
    let original = Tree::Blob(Blob::new(0, *b"abc"));
    let mut copy = original.deep_clone();
    assert_eq!(copy, original);

    copy.as_blob_mut().unwrap().append_data(b"d");
    assert_ne!(copy, original);
    assert_eq!(original.as_blob().unwrap().data(), b"abc");
}

#[test]
fn test_deep_clone_reallocates_interior_nodes() {
    let child = natural(1);
    let original = Tree::Prefix(Prefix::new(
        0,
        Arc::new(Tree::Name(Name::new(0, *b"-"))),
        child.clone(),
    ));

    let copy = original.deep_clone();
    assert_eq!(copy, original);
    assert!(!Arc::ptr_eq(
        original.as_prefix().unwrap().right(),
        copy.as_prefix().unwrap().right()
    ));
}

#[test]
fn test_render() {
    let infix = Tree::Infix(Infix::new(0, Text::new(0, *b"+"), natural(1), natural(2)));
    assert_eq!(infix.to_string(), "1+2");

    let block = Tree::Block(Block::new(
        0,
        Arc::new(infix),
        Name::new(0, *b"("),
        Name::new(0, *b")"),
    ));
    assert_eq!(block.to_string(), "(1+2)");

    let postfix = Tree::Postfix(Postfix::new(
        0,
        natural(3),
        Arc::new(Tree::Name(Name::new(0, *b"%"))),
    ));
    assert_eq!(postfix.to_string(), "3%");

    let delimited = Tree::DelimitedText(DelimitedText::new(
        0,
        Text::new(0, *b"raw content"),
        Name::new(0, *b"<<"),
        Name::new(0, *b">>"),
    ));
    assert_eq!(delimited.to_string(), "<<raw content>>");
    assert_eq!(delimited.arity(), 3);

    assert_eq!(Tree::Real(Real::new(0, 1.5)).to_string(), "1.5");
    assert_eq!(Tree::Character(Character::new(0, 'a')).to_string(), "'a'");
    assert_eq!(Tree::Character(Character::new(0, '\'')).to_string(), "''''");
    assert_eq!(
        Tree::Text(Text::new(0, *b"he said \"hi\"")).to_string(),
        "\"he said \"\"hi\"\"\""
    );
    assert_eq!(
        Tree::Blob(Blob::new(0, vec![0xDE, 0xAD])).to_string(),
        "$DEAD$"
    );
    assert_eq!(Tree::Name(Name::newline(0)).to_string(), "\\n");
}
