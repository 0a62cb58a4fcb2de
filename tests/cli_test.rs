// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests of the sudoku-verify binary.

mod common;

use common::{sample_path, SAMPLE_JOBS};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

const TWO_LEVEL: &str = "[457689,189723,623154] (ROOT)\n  [458679,729813,163245] (C(1,2))\n";
const MISMATCHED: &str = "[457689,189723,623154] (ROOT)\n  [489567,127893,356214] (C(1,2))\n";

fn sudoku_verify() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sudoku-verify"))
}

fn forest_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_verified_file() {
    let file = forest_file(TWO_LEVEL);
    let output = sudoku_verify().arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "./sudoku2     2  [457689,189723,623154]\n");
}

#[test]
fn test_failure_exit_status() {
    let file = forest_file(MISMATCHED);
    let output = sudoku_verify().arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Error [Mismatch]"));
}

#[test]
fn test_missing_file() {
    let output = sudoku_verify()
        .arg("/nonexistent/forest.txt")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error [Io]"));
}

#[test]
fn test_standard_input() {
    for args in [&[][..], &["-"][..]] {
        let mut child = sudoku_verify()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(TWO_LEVEL.as_bytes())
            .unwrap();
        let output = child.wait_with_output().unwrap();
        assert!(output.status.success());
        assert_eq!(stdout(&output), "./sudoku2     2  [457689,189723,623154]\n");
    }
}

#[test]
fn test_sample_job_list() {
    let output = sudoku_verify().arg(sample_path()).output().unwrap();
    assert!(output.status.success());
    let expected: String = SAMPLE_JOBS.iter().map(|job| format!("{}\n", job)).collect();
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_completeness_flags() {
    let output = sudoku_verify()
        .args(["--complete", "--expect", "654"])
        .arg(sample_path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = sudoku_verify()
        .arg("--complete")
        .arg(sample_path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error [Incomplete]"));
    assert_eq!(stdout(&output).lines().count(), SAMPLE_JOBS.len());
}

#[test]
fn test_stats() {
    let output = sudoku_verify()
        .arg("--stats")
        .arg(sample_path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Nodes"));
    assert!(err.contains("Distinct"));
    assert_eq!(stdout(&output).lines().count(), SAMPLE_JOBS.len());
}

#[test]
fn test_header_and_comments() {
    let file = forest_file(&format!("# two nodes\n{}", TWO_LEVEL));
    let output = sudoku_verify()
        .args(["--header", "--echo-comments"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "# verified job list created by sudoku-verify\n\
         # two nodes\n\
         ./sudoku2     2  [457689,189723,623154]\n"
    );
}
