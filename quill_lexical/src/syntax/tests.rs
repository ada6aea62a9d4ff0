use quill_tree::text::Name;

use super::{Syntax, Table};

#[test]
fn test_is_operator_accepts_extensible_spellings() {
    let mut table = Table::new();
    table.add_operator(":=");
    table.add_operator("+");

    assert!(table.is_operator(b""));
    assert!(table.is_operator(b":"));
    assert!(!table.is_operator(b":="));
    assert!(!table.is_operator(b"+"));
    assert!(!table.is_operator(b"-"));
}

#[test]
fn test_is_operator_covers_block_spellings() {
    let mut table = Table::new();
    table.add_block("/*", "*/");

    assert!(table.is_operator(b"/"));
    assert!(table.is_operator(b"*"));
    assert!(!table.is_operator(b"/*"));
}

#[test]
fn test_block_closing_normalizes() {
    let mut table = Table::new();
    table.add_block("Begin", "End");
    table.add_block("(", ")");

    let closing = table.block_closing(&Name::new(4, *b"begin")).unwrap();
    assert_eq!(closing.data(), b"end");
    assert_eq!(closing.position(), 4);

    let closing = table.block_closing(&Name::new(0, *b"(")).unwrap();
    assert_eq!(closing.data(), b")");

    assert!(table.block_closing(&Name::new(0, *b"other")).is_none());
}
