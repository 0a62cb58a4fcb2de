// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

// The sudoku-verify CLI.
// Reads an equivalence forest and writes the verified job list.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;
use sudoku_forest::grid::CONFIGURATIONS;
use sudoku_forest::{verify, Report, VerifyError, VerifyOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verify an equivalence forest of Sudoku band configurations
#[derive(Parser, Debug)]
#[command(name = "sudoku-verify")]
#[command(version, about, long_about = None)]
struct Args {
    /// Forest file; standard input if omitted or "-"
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Print a comment line before the job list
    #[arg(long)]
    header: bool,

    /// Copy comment lines of the input to the output
    #[arg(long)]
    echo_comments: bool,

    /// Print counts of classes, nodes and rules to stderr
    #[arg(long)]
    stats: bool,

    /// Require one node per configuration, with no configuration repeated
    #[arg(long)]
    complete: bool,

    /// Number of configurations a complete forest has
    #[arg(long, value_name = "N", default_value_t = CONFIGURATIONS)]
    expect: usize,
}

impl Args {
    fn options(&self) -> VerifyOptions {
        VerifyOptions {
            header: self.header,
            echo_comments: self.echo_comments,
            track_distinct: self.stats,
            require_complete: self.complete,
            expected_configurations: self.expect,
        }
    }
}

fn run(args: &Args) -> Result<Report, VerifyError> {
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());
    match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            let input = BufReader::new(File::open(path)?);
            verify(input, output, args.options())
        }
        _ => verify(io::stdin().lock(), output, args.options()),
    }
}

fn main() {
    // Use RUST_LOG to see progress, e.g.:
    //   RUST_LOG=sudoku_forest=info sudoku-verify tree
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            if args.stats {
                eprint!("{}", report);
            }
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.kind().as_ref(), e);
            process::exit(1);
        }
    }
}
