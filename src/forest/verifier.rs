// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The forest verifier.
//!
//! Lines are fed in one at a time. For each node the verifier re-derives the
//! node from its parent (or the parent from the node, for a reversed rule) by
//! applying the named transform and canonicalizing, and compares the result
//! with the label given. When a root closes, its class size goes to the output
//! as a job-list line.
//!
//! The verifier stops at the first error. After that it only reports that it
//! has halted; there is no recovery.

use super::errors::{ErrorKind, Stage, VerifyError, VerifyResult};
use super::record::{parse_line, Line, Record};
use crate::grid::constants::CONFIGURATIONS;
use crate::grid::{decode, Grid};
use crate::rule::{split_direction, Direction, Transform, ROOT};
use crate::state::{Counters, Node, Statistics, VerifierState};
use crate::symmetry::canonical_form;
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use tracing::{debug, error, info, warn};

/// First line of the job list when a header is requested.
pub const HEADER: &str = "# verified job list created by sudoku-verify";

/// Switches for one verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Write [`HEADER`] before the first summary line.
    pub header: bool,
    /// Copy comment lines of the input to the output.
    pub echo_comments: bool,
    /// Count distinct configurations.
    pub track_distinct: bool,
    /// At the end, require `expected_configurations` nodes, all distinct.
    pub require_complete: bool,
    /// Node count of a complete forest, [`CONFIGURATIONS`] by default.
    pub expected_configurations: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            header: false,
            echo_comments: false,
            track_distinct: false,
            require_complete: false,
            expected_configurations: CONFIGURATIONS,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of equivalence classes (trees) closed.
    pub classes: usize,
    /// Size of the largest class.
    pub largest_class: usize,
    /// Number of distinct configurations, if tracked.
    pub distinct: Option<usize>,
    pub statistics: Statistics,
}

impl Report {
    /// Total number of nodes over all classes.
    pub fn nodes(&self) -> usize {
        self.statistics.get(Counters::Nodes) as usize
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24}{:>8}", "Classes", self.classes)?;
        writeln!(f, "{:<24}{:>8}", "LargestClass", self.largest_class)?;
        if let Some(distinct) = self.distinct {
            writeln!(f, "{:<24}{:>8}", "Distinct", distinct)?;
        }
        write!(f, "{}", self.statistics)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Reading,
    Halted(ErrorKind),
}

/// Stream-driven verifier writing job-list lines to `out`.
pub struct ForestVerifier<W: Write> {
    out: W,
    options: VerifyOptions,
    state: VerifierState,
    phase: Phase,
    line_number: usize,
    statistics: Statistics,
    classes: usize,
    largest_class: usize,
    distinct: Option<HashSet<Grid>>,
}

impl<W: Write> ForestVerifier<W> {
    /// Create a verifier, writing the header if one is requested.
    pub fn new(mut out: W, options: VerifyOptions) -> VerifyResult<Self> {
        if options.header {
            writeln!(out, "{}", HEADER)?;
        }
        let distinct =
            (options.track_distinct || options.require_complete).then(HashSet::new);
        Ok(Self {
            out,
            options,
            state: VerifierState::new(),
            phase: Phase::Reading,
            line_number: 0,
            statistics: Statistics::new(),
            classes: 0,
            largest_class: 0,
            distinct,
        })
    }

    /// Process one input line (without its newline).
    ///
    /// On error the verifier halts, and every later call fails with
    /// [`VerifyError::Halted`].
    pub fn process_line(&mut self, line: &str) -> VerifyResult<()> {
        if let Phase::Halted(kind) = self.phase {
            return Err(VerifyError::Halted(kind));
        }
        self.line_number += 1;
        self.step(line).map_err(|err| {
            let kind = err.kind();
            error!(line = self.line_number, kind = kind.as_ref(), "{}", err);
            self.phase = Phase::Halted(kind);
            err
        })
    }

    /// Close the last class, run the completeness check if requested, and
    /// flush the output.
    pub fn finish(mut self) -> VerifyResult<Report> {
        if let Phase::Halted(kind) = self.phase {
            return Err(VerifyError::Halted(kind));
        }
        self.close_class()?;
        self.out.flush()?;

        let distinct = self.distinct.as_ref().map(HashSet::len);
        let nodes = self.statistics.get(Counters::Nodes) as usize;
        if self.options.require_complete {
            let distinct = distinct.unwrap_or_default();
            let expected = self.options.expected_configurations;
            if nodes != expected || distinct != expected {
                return Err(VerifyError::Incomplete {
                    nodes,
                    distinct,
                    expected,
                });
            }
        }

        info!(
            classes = self.classes,
            nodes,
            largest = self.largest_class,
            "forest verified"
        );
        Ok(Report {
            classes: self.classes,
            largest_class: self.largest_class,
            distinct,
            statistics: self.statistics,
        })
    }

    /// Whether the verifier has stopped on an error.
    pub fn is_halted(&self) -> bool {
        matches!(self.phase, Phase::Halted(_))
    }

    fn step(&mut self, line: &str) -> VerifyResult<()> {
        let record = match parse_line(line) {
            Ok(Line::Blank) => return Ok(()),
            Ok(Line::Comment(text)) => {
                if self.options.echo_comments {
                    writeln!(self.out, "{}", text)?;
                }
                return Ok(());
            }
            Ok(Line::Record(record)) => record,
            Err(reason) => {
                return Err(VerifyError::MalformedLabel {
                    line: self.line_number,
                    label: line.trim().to_string(),
                    reason,
                })
            }
        };

        if record.depth == 0 {
            self.close_class()?;
        }
        self.plant(&record)?;

        if record.rule == ROOT {
            if record.depth != 0 {
                return Err(self.misuse(&record));
            }
            self.statistics.increment_counter(Counters::Roots);
            debug!(line = self.line_number, label = record.label, "root");
            return Ok(());
        }
        if record.depth == 0 {
            return Err(self.misuse(&record));
        }
        self.check_edge(&record)
    }

    /// Emit the summary of the open class, if any.
    fn close_class(&mut self) -> VerifyResult<()> {
        if let Some(summary) = self.state.close_class() {
            writeln!(self.out, "{}", summary)?;
            info!(size = summary.size, root = %summary.root, "class closed");
            self.classes += 1;
            self.largest_class = self.largest_class.max(summary.size);
        }
        Ok(())
    }

    fn plant(&mut self, record: &Record<'_>) -> VerifyResult<()> {
        let grid = decode(record.label).map_err(|reason| VerifyError::MalformedLabel {
            line: self.line_number,
            label: record.label.to_string(),
            reason,
        })?;
        if record.depth > self.state.height() {
            warn!(
                line = self.line_number,
                depth = record.depth,
                stack = self.state.height(),
                "node is more than one level below its predecessor"
            );
        }
        self.state.plant(
            record.depth,
            Node {
                label: record.label.to_string(),
                grid,
                line: self.line_number,
            },
        );
        self.statistics.increment_counter(Counters::Nodes);
        if let Some(distinct) = self.distinct.as_mut() {
            distinct.insert(grid);
        }
        Ok(())
    }

    fn misuse(&self, record: &Record<'_>) -> VerifyError {
        VerifyError::RuleMisuse {
            line: self.line_number,
            depth: record.depth,
            rule: record.rule.to_string(),
        }
    }

    /// Check that the rule of the current node connects it to its parent.
    fn check_edge(&mut self, record: &Record<'_>) -> VerifyResult<()> {
        let line = self.line_number;
        let depth = record.depth;
        let (body, direction) = split_direction(record.rule);

        let (node, parent) = match (self.state.current(), self.state.parent()) {
            (Some(node), Some(parent)) => (node, parent),
            _ => {
                return Err(VerifyError::MissingParent {
                    line,
                    depth,
                    label: record.label.to_string(),
                })
            }
        };
        let (from, to) = match direction {
            Direction::Forward => (parent, node),
            Direction::Reversed => (node, parent),
        };
        let invalid = |stage: Stage| VerifyError::InvalidConfiguration {
            line,
            depth,
            stage,
            parent: parent.label.clone(),
            parent_line: parent.line,
            node: node.label.clone(),
            rule: record.rule.to_string(),
        };

        if !from.grid.is_valid() || !to.grid.is_valid() {
            return Err(invalid(Stage::BeforeTransform));
        }
        let transform: Transform = body.parse().map_err(|reason| VerifyError::MalformedRule {
            line,
            depth,
            rule: record.rule.to_string(),
            reason,
        })?;

        let mut moved = from.grid;
        transform.apply(&mut moved);
        if !moved.is_valid() {
            return Err(invalid(Stage::AfterTransform));
        }
        let derived = canonical_form(&moved);
        if !derived.is_valid() {
            return Err(VerifyError::CanonicalFormInvalid {
                line,
                rule: record.rule.to_string(),
                derived: derived.to_string(),
            });
        }
        if derived != to.grid {
            return Err(VerifyError::Mismatch {
                line,
                depth,
                parent: parent.label.clone(),
                parent_line: parent.line,
                node: node.label.clone(),
                rule: record.rule.to_string(),
                derived: derived.label().unwrap_or_else(|| derived.to_string()),
                expected: to.label.clone(),
            });
        }

        debug!(line, depth, rule = record.rule, label = record.label, "verified");
        self.statistics.record_edge(&transform, direction);
        Ok(())
    }
}
