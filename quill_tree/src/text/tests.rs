use std::cmp::Ordering;

use super::{Name, Text};

#[test]
fn test_text_content() {
    let text = Text::new(0, *b"hello world");
    assert_eq!(text.as_str(), "hello world");
    assert_eq!(text.len(), 11);

    let binary = Text::new(0, vec![0xFF, 0xFE]);
    assert_eq!(binary.as_str(), "\u{FFFD}\u{FFFD}");
}

#[test]
fn test_name_validity() {
    assert!(Name::is_valid(b"foo"));
    assert!(Name::is_valid(b"foo_bar2"));
    assert!(Name::is_valid(b"A1"));
    assert!(Name::is_valid(b"+"));
    assert!(Name::is_valid(b":="));
    assert!(Name::is_valid(b"\n"));
    assert!(Name::is_valid(b"\t"));
    assert!(Name::is_valid(b"\x08"));
    assert!(Name::is_valid("héllo".as_bytes()));

    assert!(!Name::is_valid(b""));
    assert!(!Name::is_valid(b"foo__bar"));
    assert!(!Name::is_valid(b"foo_"));
    assert!(!Name::is_valid(b"foo+"));
    assert!(!Name::is_valid(b"+foo"));
    assert!(!Name::is_valid(b"1foo"));
    assert!(!Name::is_valid(b"\n\n"));
}

#[test]
fn test_name_normalization() {
    assert_eq!(Name::normalize(b"Joe_Dalton"), b"joedalton");
    assert_eq!(Name::normalize(b"if"), b"if");

    // operator names keep their underscores
    assert_eq!(Name::normalize(b"_"), b"_");

    // normalization is idempotent
    let once = Name::normalize(b"Some_Name");
    assert_eq!(Name::normalize(&once), once);
}

#[test]
fn test_name_comparison_uses_normalized_forms() {
    let first = Name::new(0, *b"JoeDalton");
    let second = Name::new(9, *b"joe_dalton");
    let third = Name::new(0, *b"lucky");

    assert_eq!(first, second);
    assert_eq!(first.compare(&second), Ordering::Equal);
    assert_ne!(first, third);
    assert_eq!(first.compare(&third), Ordering::Less);
}
