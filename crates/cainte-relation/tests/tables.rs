//! Tests for two-column table loading.

use cainte_relation::{TableError, load_pairs, parse_pairs};
use std::io::Write;

#[test]
fn parses_rows_in_order() {
    let pairs = parse_pairs("i\t1\nii\t2\n").unwrap();
    assert_eq!(
        pairs,
        vec![
            ("i".to_string(), "1".to_string()),
            ("ii".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn skips_comments_and_blank_lines() {
    let pairs = parse_pairs("# digit rank\n\ni\t1\n\n# done\n").unwrap();
    assert_eq!(pairs, vec![("i".to_string(), "1".to_string())]);
}

#[test]
fn values_may_contain_spaces() {
    let pairs = parse_pairs("kph\tciliméadar san uair\n").unwrap();
    assert_eq!(pairs[0].1, "ciliméadar san uair");
}

#[test]
fn row_without_tab_is_fatal() {
    let err = parse_pairs("i\t1\nbroken row\n").unwrap_err();
    match err {
        TableError::Parse { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("broken row"));
        }
        TableError::Io { .. } => panic!("expected parse error"),
    }
}

#[test]
fn row_with_extra_column_is_fatal() {
    let err = parse_pairs("i\t1\t9\n").unwrap_err();
    assert!(matches!(err, TableError::Parse { line: 1, .. }));
}

#[test]
fn row_with_empty_column_is_fatal() {
    assert!(parse_pairs("i\t\n").is_err());
    assert!(parse_pairs("\t1\n").is_err());
}

#[test]
fn windows_line_endings_are_tolerated() {
    let pairs = parse_pairs("i\t1\r\nii\t2\r\n").unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[1].0, "ii");
}

#[test]
fn loads_pairs_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "oz\tunsa\nlb\tpunt\n").unwrap();

    let pairs = load_pairs(file.path()).unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0], ("oz".to_string(), "unsa".to_string()));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_pairs("/nonexistent/measurements.tsv").unwrap_err();
    assert!(matches!(err, TableError::Io { .. }));
}

#[test]
fn file_parse_error_reports_path_and_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "ok\trow\nbad\n").unwrap();

    let err = load_pairs(file.path()).unwrap_err();
    match err {
        TableError::Parse { path, line, .. } => {
            assert_eq!(path, file.path());
            assert_eq!(line, 2);
        }
        TableError::Io { .. } => panic!("expected parse error"),
    }
}
