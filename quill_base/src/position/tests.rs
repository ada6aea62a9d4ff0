use super::Positions;
use crate::source_file::SourceFile;

#[test]
fn test_info_resolves_lines_and_columns() {
    let source = SourceFile::temp("first\nsecond line\n").unwrap();

    let mut positions = Positions::new();
    positions.open_source(&source);

    for _ in 0..source.content().len() {
        positions.step();
    }
    assert_eq!(positions.position(), 18);

    // 'f' of "first"
    let info = positions.info(0).unwrap();
    assert_eq!(info.line, 1);
    assert_eq!(info.column, 0);
    assert_eq!(info.line_start, 0);
    assert_eq!(info.line_length, 5);
    assert_eq!(info.source_line().unwrap(), "first");

    // 'c' of "second"
    let info = positions.info(8).unwrap();
    assert_eq!(info.line, 2);
    assert_eq!(info.column, 2);
    assert_eq!(info.line_start, 6);
    assert_eq!(info.line_length, 11);
    assert_eq!(info.source_line().unwrap(), "second line");
}

#[test]
fn test_positions_span_multiple_inputs() {
    let first = SourceFile::temp("aa\n").unwrap();
    let second = SourceFile::temp("b\n").unwrap();

    let mut positions = Positions::new();
    positions.open_source(&first);
    for _ in 0..first.content().len() {
        positions.step();
    }
    positions.open_source(&second);
    for _ in 0..second.content().len() {
        positions.step();
    }

    let info = positions.info(1).unwrap();
    assert_eq!(info.file, *first.full_path());
    assert_eq!(info.line, 1);
    assert_eq!(info.column, 1);

    let info = positions.info(3).unwrap();
    assert_eq!(info.file, *second.full_path());
    assert_eq!(info.line, 1);
    assert_eq!(info.column, 0);
    assert_eq!(info.line_start, 3);
}

#[test]
fn test_stream_inputs_have_no_info() {
    let mut positions = Positions::new();
    positions.open_source_file("<stdin>");
    positions.step();

    assert!(positions.info(0).is_none());
}
