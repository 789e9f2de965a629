//! End-to-end tests for the sablet binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn sablet() -> Command {
    Command::cargo_bin("sablet").unwrap()
}

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".sb").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn tokens_dumps_text_lines() {
    let file = source_file("let x = 42;");
    sablet()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword"))
        .stdout(predicate::str::contains("identifier"))
        .stdout(predicate::str::contains("integer-literal"));
}

#[test]
fn tokens_reads_stdin_with_dash() {
    sablet()
        .arg("tokens")
        .arg("-")
        .write_stdin("fn main() {}")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword"));
}

#[test]
fn tokens_json_output_is_parseable() {
    let file = source_file("'a' 'lifetime r#type");
    let output = sablet()
        .arg("tokens")
        .arg("--format")
        .arg("json")
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tokens: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0]["kind"], "char-literal");
    assert_eq!(tokens[1]["kind"], "lifetime");
    assert_eq!(tokens[2]["kind"], "raw-identifier");
}

#[test]
fn tokens_rejects_unknown_format() {
    let file = source_file("x");
    sablet()
        .arg("tokens")
        .arg("--format")
        .arg("yaml")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn check_passes_on_clean_input() {
    let file = source_file("fn add(a: i32, b: i32) -> i32 { a + b }");
    sablet()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no lexical errors"));
}

#[test]
fn check_fails_on_lexical_errors() {
    let file = source_file("let s = \"unterminated");
    sablet()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated string literal"))
        .stderr(predicate::str::contains("E1101"));
}

#[test]
fn check_renders_snippets() {
    let file = source_file("let x = 1px;");
    sablet()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("let x = 1px;"))
        .stderr(predicate::str::contains("^"));
}

#[test]
fn check_reads_stdin_with_dash() {
    sablet()
        .arg("check")
        .arg("-")
        .write_stdin("` oops")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized character"));
}

#[test]
fn missing_file_reports_io_error() {
    sablet()
        .arg("tokens")
        .arg("/no/such/file.sb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn config_file_sets_default_format() {
    let file = source_file("x");
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, "[tokens]\nformat = \"json\"").unwrap();

    let output = sablet()
        .arg("--config")
        .arg(config.path())
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(serde_json::from_slice::<serde_json::Value>(&output).is_ok());
}
