// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use sudoku_forest::{verify, Report, VerifyError, VerifyOptions};

/// Path of the forest excerpt: nine complete trees, 654 nodes, produced by
/// the enumerator.
pub fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/forest_sample.txt")
}

pub fn sample_forest() -> String {
    std::fs::read_to_string(sample_path()).expect("sample forest")
}

/// Job list of the sample forest.
pub const SAMPLE_JOBS: [&str; 9] = [
    "./sudoku2     4  [456789,789123,123456]",
    "./sudoku2   108  [456789,789123,123465]",
    "./sudoku2    72  [456789,789123,231564]",
    "./sudoku2    24  [456789,789231,123645]",
    "./sudoku2     6  [456789,789231,231564]",
    "./sudoku2     6  [456789,789231,312456]",
    "./sudoku2    20  [456789,897312,312564]",
    "./sudoku2   144  [457689,189723,623154]",
    "./sudoku2   270  [457689,198723,632514]",
];

pub const SAMPLE_NODES: usize = 654;

/// Run the verifier over `input`, returning its result and everything it wrote.
pub fn run_with(input: &str, options: VerifyOptions) -> (Result<Report, VerifyError>, String) {
    let mut out = Vec::new();
    let result = verify(input.as_bytes(), &mut out, options);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

pub fn run(input: &str) -> (Result<Report, VerifyError>, String) {
    run_with(input, VerifyOptions::default())
}

/// Summary lines of a job list.
pub fn jobs(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with("./sudoku2"))
        .collect()
}
