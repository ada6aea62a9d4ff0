use std::io::Read;

#[test]
fn test_get_line_byte_positions() {
    let content = b"Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(content);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..15, 15..18]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "test file";
    let source_file = super::SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE.as_bytes());
}

#[test]
fn test_arbitrary_bytes_load() {
    use std::io::Write;

    // a Latin-1 'é' is not valid UTF-8, the file must load regardless
    let mut tempfile = tempfile::Builder::new().prefix("quill").tempfile().unwrap();
    tempfile.as_file_mut().write_all(b"caf\xE9\nnext\n").unwrap();
    let path = tempfile.path().to_owned();

    let source_file = super::SourceFile::load(tempfile.into_file(), path).unwrap();
    assert_eq!(source_file.content(), b"caf\xE9\nnext\n");
    assert_eq!(source_file.get_line(1), Some(&b"caf\xE9\n"[..]));

    let location = source_file.get_location(5).unwrap();
    assert_eq!(location.line, 2);
    assert_eq!(location.column, 1);
}

#[test]
fn test_get_location_counts_characters() {
    let source_file = super::SourceFile::temp("éa\nb").unwrap();

    // 'a' follows one two-byte character
    let location = source_file.get_location(2).unwrap();
    assert_eq!(location.line, 1);
    assert_eq!(location.column, 2);

    // an index inside the two-byte sequence has no column of its own
    assert!(source_file.get_location(1).is_none());

    let location = source_file.get_location(4).unwrap();
    assert_eq!(location.line, 2);
    assert_eq!(location.column, 1);
}

#[test]
fn test_byte_reader() {
    let source_file = super::SourceFile::temp("stream me").unwrap();
    let mut reader = source_file.reader();

    let mut buffer = [0u8; 6];
    assert_eq!(reader.read(&mut buffer).unwrap(), 6);
    assert_eq!(&buffer, b"stream");

    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b" me");

    // exhausted readers report zero bytes
    assert_eq!(reader.read(&mut buffer).unwrap(), 0);
}
