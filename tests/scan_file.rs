use std::io::Write;
use std::path::Path;

use linescan::{scan_file, Match, ScanError, ScanOutcome, Scanner};
use tempfile::NamedTempFile;

const TARGET: &str = r#"id="bureau_602""#;

fn file_with(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn finds_marker_in_svg() {
    let svg = file_with(
        b"<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <g id=\"bureau_594\">\n    <rect id=\"bureau_602\" x=\"10\" />\n  </g>\n</svg>\n",
    );

    let outcome = scan_file(svg.path(), TARGET).unwrap();
    assert_eq!(outcome, ScanOutcome::Found(Match::new(3, r#"<rect id="bureau_602" x="10" />"#)));
}

#[test]
fn spec_example_lines() {
    let file = file_with(b"a\nid=\"bureau_602\" x=1\nb\n");
    let outcome = scan_file(file.path(), TARGET).unwrap();
    assert_eq!(outcome, ScanOutcome::Found(Match::new(2, r#"id="bureau_602" x=1"#)));
}

#[test]
fn missing_marker_is_not_found() {
    let file = file_with(b"<svg>\n<g id=\"bureau_4\"/>\n</svg>");
    assert_eq!(scan_file(file.path(), TARGET).unwrap(), ScanOutcome::NotFound);
}

#[test]
fn empty_file_is_not_found() {
    let file = file_with(b"");
    assert_eq!(scan_file(file.path(), TARGET).unwrap(), ScanOutcome::NotFound);
}

#[test]
fn match_on_last_line_without_trailing_newline() {
    let file = file_with(b"1\n2\n3\n4\nid=\"bureau_602\"");
    let outcome = scan_file(file.path(), TARGET).unwrap();
    assert_eq!(outcome.as_match().map(|m| m.line_number), Some(5));
}

#[test]
fn nonexistent_path_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = scan_file(dir.path().join("plan_v2.svg"), TARGET).unwrap_err();
    assert!(matches!(err, ScanError::FileAccess { .. }));
}

#[test]
fn directory_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = scan_file(dir.path(), TARGET).unwrap_err();
    assert!(matches!(err, ScanError::FileAccess { .. }));
}

#[test]
fn invalid_utf8_is_a_decoding_error() {
    let file = file_with(b"<svg>\n<text>\xe9t\xe9</text>\nid=\"bureau_602\"\n");
    let err = scan_file(file.path(), TARGET).unwrap_err();
    match err {
        ScanError::Decoding { path, line_number } => {
            assert_eq!(path, file.path());
            assert_eq!(line_number, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn context_window_from_file() {
    let file = file_with(b"l1\nl2\nl3\nl4\nl5\nl6\nid=\"bureau_602\"\nl8\nl9\n");
    let outcome = Scanner::new(TARGET)
        .with_context(5)
        .scan_path(Path::new(file.path()))
        .unwrap();

    let found = outcome.as_match().unwrap();
    let numbers: Vec<usize> = found.context.iter().map(|c| c.line_number).collect();
    assert_eq!(numbers, vec![2, 3, 4, 5, 6, 7, 8, 9]);
}
