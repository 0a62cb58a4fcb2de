// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ancestor stack.
//!
//! Nodes arrive in depth-first order, so the path from the current root to
//! the current node is all the tree structure the verifier needs. Entry `d`
//! of the stack is the latest node seen at depth `d`. Planting a node at depth
//! `d` drops every entry at depth `d` or deeper; those belong to subtrees that
//! are already complete.
//!
//! The stack does not check that the input really is depth-first. A node may
//! arrive more than one level below its predecessor, in which case its parent
//! is simply the entry below it.

use crate::grid::Grid;
use std::fmt;

/// A node of the forest as read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The label exactly as written.
    pub label: String,
    /// The decoded label.
    pub grid: Grid,
    /// 1-based input line number.
    pub line: usize,
}

/// One finished equivalence class: its root and how many nodes it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSummary {
    pub size: usize,
    pub root: String,
}

/// The job-list line for the class, e.g. `./sudoku2     4  [456789,789123,123456]`.
impl fmt::Display for ClassSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "./sudoku2{:>6}  {}", self.size, self.root)
    }
}

/// Ancestor stack plus the size of the class being read.
#[derive(Debug, Default)]
pub struct VerifierState {
    ancestors: Vec<Node>,
    size: usize,
}

impl VerifierState {
    pub fn new() -> Self {
        VerifierState::default()
    }

    /// Number of nodes on the stack; the depth a child of the top would get.
    pub fn height(&self) -> usize {
        self.ancestors.len()
    }

    /// Root of the current class, if one has been opened.
    pub fn root(&self) -> Option<&Node> {
        self.ancestors.first()
    }

    /// The most recently planted node.
    pub fn current(&self) -> Option<&Node> {
        self.ancestors.last()
    }

    /// The node below the most recently planted one.
    pub fn parent(&self) -> Option<&Node> {
        self.ancestors.len().checked_sub(2).map(|i| &self.ancestors[i])
    }

    /// Close the current class, returning its summary and resetting the size.
    ///
    /// Returns None if no root has been opened yet.
    pub fn close_class(&mut self) -> Option<ClassSummary> {
        let root = self.root()?;
        let summary = ClassSummary {
            size: self.size,
            root: root.label.clone(),
        };
        self.size = 0;
        Some(summary)
    }

    /// Truncate the stack to `depth` entries, push `node` and count it.
    pub fn plant(&mut self, depth: usize, node: Node) {
        self.ancestors.truncate(depth);
        self.ancestors.push(node);
        self.size += 1;
    }
}
