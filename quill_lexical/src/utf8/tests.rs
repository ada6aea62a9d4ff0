#[test]
fn test_byte_classification() {
    assert!(!super::is_first(b'a'));
    assert!(!super::is_next(b'a'));

    let e_acute = "é".as_bytes();
    assert!(super::is_first(e_acute[0]));
    assert!(super::is_next(e_acute[1]));
    assert_eq!(super::sequence_length(e_acute[0]), 2);

    let crab = "🦀".as_bytes();
    assert_eq!(super::sequence_length(crab[0]), 4);
    assert!(crab[1..].iter().all(|&byte| super::is_next(byte)));
}

#[test]
fn test_count() {
    assert_eq!(super::count(b""), 0);
    assert_eq!(super::count(b"abc"), 3);
    assert_eq!(super::count("éé".as_bytes()), 2);
    assert_eq!(super::count("a🦀b".as_bytes()), 3);
}

#[test]
fn test_decode_and_code() {
    assert_eq!(super::decode("a".as_bytes()), Some('a'));
    assert_eq!(super::decode("é".as_bytes()), Some('é'));
    assert_eq!(super::decode("ab".as_bytes()), None);
    assert_eq!(super::decode(&[0xC3]), None);

    assert_eq!(super::code(b"abc"), 'a');
    assert_eq!(super::code("é!".as_bytes()), 'é');
    assert_eq!(super::code(b""), '\0');
    assert_eq!(super::code(&[0xC3, 0x28]), char::REPLACEMENT_CHARACTER);
}
