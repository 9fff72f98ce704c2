//! Integration tests for the decode command.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;
use typed_csv_cli::cli::Cli;
use typed_csv_cli::commands::{DecodeSummary, run_decode};

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn run(path: &Path, extra: &[&str]) -> (anyhow::Result<DecodeSummary>, String) {
    let mut argv = vec!["typed-csv".to_string(), path.display().to_string()];
    argv.extend(extra.iter().map(|arg| (*arg).to_string()));
    let cli = Cli::try_parse_from(argv).expect("parse args");
    let mut out = Vec::new();
    let result = run_decode(&cli.decode, &mut out);
    (result, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn prints_records_joined_by_comma_space() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "people.csv", "Alice,30,Engineer\nBob,25,Designer\n");

    let (result, output) = run(&path, &[]);

    assert_eq!(result.unwrap(), DecodeSummary { records: 2, rows: 2 });
    insta::assert_snapshot!(output.trim_end(), @r"
    Alice, 30, Engineer
    Bob, 25, Designer
    ");
}

#[test]
fn skips_header_with_custom_delimiters() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "semi.csv", "name;age;role|'Doe; Jane';41;Lead|");

    let (result, output) = run(&path, &["1", ";", "|", "'"]);

    assert_eq!(result.unwrap().records, 1);
    assert_eq!(output, "Doe; Jane, 41, Lead\n");
}

#[test]
fn json_output_uses_typed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "mixed.csv", "x,1.5,true\n");

    let (result, output) = run(&path, &["--columns", "string,float,bool", "--output", "json"]);

    result.unwrap();
    insta::assert_snapshot!(output.trim_end(), @r#"["x",1.5,true]"#);
}

#[test]
fn stops_at_first_error_after_writing_earlier_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "bad.csv", "Alice,30,Engineer\nBob,abc,Designer\nCarol,41,Lead\n");

    let (result, output) = run(&path, &[]);

    let error = result.unwrap_err();
    assert_eq!(
        format!("{error:#}"),
        "cannot read \"abc\" as i64 at row 2, column 2"
    );
    assert_eq!(output, "Alice, 30, Engineer\n");
}

#[test]
fn blank_row_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "blank.csv", "a,1,b\n\nc,2,d\n");

    let (result, _) = run(&path, &[]);

    assert_eq!(result.unwrap_err().to_string(), "row 2 is empty");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let (result, output) = run(&path, &[]);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.starts_with("failed to open"));
    assert!(message.contains("absent.csv"));
    assert!(message.contains("input stream is not readable"));
    assert!(output.is_empty());
}

#[test]
fn skip_beyond_input_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "short.csv", "a,1,b\n");

    let (result, _) = run(&path, &["5"]);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("input contains 1 row(s), cannot skip 5"));
}
