use std::cmp::Ordering;

use super::Blob;

#[test]
fn test_append_data_is_concatenation() {
    let mut split = Blob::new(0, *b"ab");
    split.append_data(b"cd");
    split.append_data(b"ef");

    let mut once = Blob::new(0, *b"ab");
    once.append_data(b"cdef");

    assert_eq!(split, once);
    assert_eq!(split.data(), b"abcdef");
}

#[test]
fn test_append_blob() {
    let mut blob = Blob::new(0, *b"head");
    blob.append(&Blob::new(9, *b"tail"));
    assert_eq!(blob.data(), b"headtail");
    assert_eq!(blob.position(), 0);
}

#[test]
fn test_range_narrows_in_place() {
    let mut blob = Blob::new(0, *b"abcdef");

    blob.range(0, blob.len());
    assert_eq!(blob.data(), b"abcdef");

    blob.range(1, 3);
    assert_eq!(blob.data(), b"bcd");
    assert_eq!(blob.len(), 3);

    blob.range(0, 0);
    assert!(blob.is_empty());
}

#[test]
fn test_compare_is_lexicographic() {
    let abc = Blob::new(0, *b"abc");
    let abd = Blob::new(7, *b"abd");
    let ab = Blob::new(0, *b"ab");

    assert_eq!(abc.compare(&abd), Ordering::Less);
    assert_eq!(abd.compare(&abc), Ordering::Greater);
    assert_eq!(ab.compare(&abc), Ordering::Less);

    // position plays no part in the comparison
    assert_eq!(abd.compare(&Blob::new(0, *b"abd")), Ordering::Equal);
}
