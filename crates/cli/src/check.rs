// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics and per-file check state.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::category::Category;

/// A single style violation tied to a file and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// File the violation was found in.
    pub path: PathBuf,

    /// 1-based line number.
    pub line: u32,

    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: impl Into<PathBuf>, line: u32, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.message)
    }
}

/// Mutable state for the file currently being checked.
///
/// One context exists per file. Stateful rules (blank-line runs, open
/// block comments) keep their counters here, never in the rule itself.
pub struct CheckContext<'a> {
    /// File being checked.
    pub path: &'a Path,

    /// Current 1-based line number (0 before the first line).
    pub line: u32,

    /// Consecutive empty lines seen so far.
    pub empty_lines: u32,

    /// Lines opening a block comment since the last close.
    pub comment_depth: u32,

    sink: &'a mut Vec<Diagnostic>,
}

impl<'a> CheckContext<'a> {
    /// Create a context that records into `sink`.
    pub fn new(path: &'a Path, sink: &'a mut Vec<Diagnostic>) -> Self {
        Self {
            path,
            line: 0,
            empty_lines: 0,
            comment_depth: 0,
            sink,
        }
    }

    /// Move to the next line. Counters are zeroed when line 1 begins.
    pub fn next_line(&mut self) {
        self.line += 1;
        if self.line == 1 {
            self.empty_lines = 0;
            self.comment_depth = 0;
        }
    }

    /// Record a violation at the current line.
    pub fn report(&mut self, message: impl Into<String>) {
        self.sink.push(Diagnostic::new(self.path, self.line, message));
    }

    /// Number of diagnostics recorded so far.
    pub fn reported(&self) -> usize {
        self.sink.len()
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub category: Category,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
