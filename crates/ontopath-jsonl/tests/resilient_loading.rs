//! Integration tests for resilient JSONL loading from files.

use ontopath_jsonl::{read_jsonl_resilient, Error, Warning};
use rstest::rstest;
use serde::Deserialize;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct TermLine {
    id: String,
    name: String,
    #[serde(default)]
    parents: Vec<String>,
}

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_reads_all_valid_records() {
    let file = write_lines(&[
        r#"{"id":"GO:0000001","name":"root"}"#,
        r#"{"id":"GO:0000002","name":"child","parents":["GO:0000001"]}"#,
    ]);

    let (records, warnings) = read_jsonl_resilient::<TermLine, _>(file.path())
        .await
        .unwrap();

    assert!(warnings.is_empty());
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].parents, vec!["GO:0000001".to_string()]);
}

#[tokio::test]
async fn test_empty_file_yields_no_records() {
    let file = write_lines(&[]);

    let (records, warnings) = read_jsonl_resilient::<TermLine, _>(file.path())
        .await
        .unwrap();

    assert!(records.is_empty());
    assert!(warnings.is_empty());
}

#[rstest]
#[case::truncated_object(r#"{"id":"GO:1","name":"#)]
#[case::missing_required_field(r#"{"id":"GO:1"}"#)]
#[case::wrong_type(r#"{"id":1,"name":"x"}"#)]
#[case::not_json("GO:1 root")]
#[tokio::test]
async fn test_malformed_line_is_skipped_with_warning(#[case] bad_line: &str) {
    let file = write_lines(&[
        r#"{"id":"GO:0","name":"before"}"#,
        bad_line,
        r#"{"id":"GO:2","name":"after"}"#,
    ]);

    let (records, warnings) = read_jsonl_resilient::<TermLine, _>(file.path())
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "before");
    assert_eq!(records[1].name, "after");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0],
        Warning::MalformedJson { line_number: 2, .. }
    ));
}

#[tokio::test]
async fn test_blank_lines_are_ignored_and_line_numbers_stay_physical() {
    let file = write_lines(&[
        "",
        r#"{"id":"GO:1","name":"one"}"#,
        "   ",
        "{broken",
    ]);

    let (records, warnings) = read_jsonl_resilient::<TermLine, _>(file.path())
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line_number(), 4);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_jsonl_resilient::<TermLine, _>(dir.path().join("absent.jsonl")).await;

    assert!(matches!(result, Err(Error::Io(_))));
}
