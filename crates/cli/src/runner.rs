// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file check execution.
//!
//! Each file gets its own [`CheckContext`], so stateful rules never see
//! another file's lines and files can be checked on any thread.

use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::check::{CheckContext, FileReport};
use crate::checks::{COMMON_RULES, width};
use crate::error::{Error, Result};

/// A classified file waiting to be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub path: PathBuf,
    pub category: Category,
}

impl FileJob {
    pub fn new(path: impl Into<PathBuf>, category: Category) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    pub fn check(&self) -> Result<FileReport> {
        check_file(&self.path, self.category)
    }
}

/// Check already-loaded content as if it were the file at `path`.
///
/// Lines are split on `\n` only; a `\r` before it stays part of the line.
pub fn check_content(path: &Path, category: Category, content: &str) -> FileReport {
    let mut diagnostics = Vec::new();
    let max_width = category.limits().max_width;

    {
        let mut ctx = CheckContext::new(path, &mut diagnostics);
        for line in content.split_terminator('\n') {
            ctx.next_line();
            for rule in COMMON_RULES.iter().chain(category.rules()) {
                let before = ctx.reported();
                rule.evaluate(line, &mut ctx);
                if ctx.reported() > before {
                    tracing::trace!("{}:{}: {} fired", path.display(), ctx.line, rule.name());
                }
            }
            width::check(line, max_width, &mut ctx);
        }
    }

    FileReport {
        path: path.to_path_buf(),
        category,
        diagnostics,
    }
}

/// Read and check one file. Invalid UTF-8 is replaced, not rejected.
pub fn check_file(path: &Path, category: Category) -> Result<FileReport> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let report = check_content(path, category, &content);
    if report.passed() {
        tracing::trace!("checked {} as {}: clean", path.display(), category);
    } else {
        tracing::trace!(
            "checked {} as {}: {} diagnostic(s)",
            path.display(),
            category,
            report.diagnostics.len()
        );
    }
    Ok(report)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
