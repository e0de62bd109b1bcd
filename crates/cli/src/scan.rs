// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Traversal engine.
//!
//! Expands the command-line roots into an ordered list of files and
//! notices, checks the files in parallel, and hands back one outcome per
//! entry in traversal order.

use std::fmt;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::category::Classifier;
use crate::check::FileReport;
use crate::error::{Error, Result};
use crate::report::RunStats;
use crate::runner::FileJob;
use crate::walker;

/// Skips any path containing one of the configured substrings.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<String>,
}

impl ExcludeFilter {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Plain substring test against the path as traversed; no globbing.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path = path.to_string_lossy();
        self.patterns.iter().any(|p| path.contains(p.as_str()))
    }
}

/// A command-line root and the exclude list that applies beneath it.
#[derive(Debug, Clone)]
pub struct ScanRoot {
    pub path: PathBuf,
    pub exclude: ExcludeFilter,
}

impl ScanRoot {
    pub fn new(path: impl Into<PathBuf>, exclude: ExcludeFilter) -> Self {
        Self {
            path: path.into(),
            exclude,
        }
    }
}

/// Non-diagnostic message emitted during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An explicitly named file matched no category.
    UnknownExtension(PathBuf),
    /// A root was neither a file nor a directory.
    UnknownFileType(PathBuf),
    /// A file could not be read and was skipped.
    Unreadable { path: PathBuf, message: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::UnknownExtension(path) => {
                write!(f, "unknown extension: {}", path.display())
            }
            Notice::UnknownFileType(path) => {
                write!(f, "unknown file type: {}", path.display())
            }
            Notice::Unreadable { path, message } => {
                write!(f, "{}: cannot read file: {}", path.display(), message)
            }
        }
    }
}

/// One entry of a run, in traversal order.
#[derive(Debug)]
pub enum Outcome {
    Report(FileReport),
    Notice(Notice),
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunResult {
    pub outcomes: Vec<Outcome>,
    pub stats: RunStats,
}

impl RunResult {
    fn new(outcomes: Vec<Outcome>) -> Self {
        let mut stats = RunStats::default();
        for outcome in &outcomes {
            if let Outcome::Report(report) = outcome {
                stats.record(report);
            }
        }
        Self { outcomes, stats }
    }

    /// Iterate over the file reports, skipping notices.
    pub fn reports(&self) -> impl Iterator<Item = &FileReport> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Report(r) => Some(r),
            Outcome::Notice(_) => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Notice(n) => Some(n),
            Outcome::Report(_) => None,
        })
    }
}

/// Discovered but not yet checked.
enum Pending {
    Check(FileJob),
    Notice(Notice),
}

/// Walks roots, classifies files, and runs the checks.
pub struct Scanner {
    classifier: Classifier,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new()?,
        })
    }

    /// Check every file reachable from `roots`.
    ///
    /// Roots are processed in the order given. Within a directory root,
    /// files come in walker order.
    pub fn scan(&self, roots: &[ScanRoot]) -> RunResult {
        let pending = self.discover(roots);

        let outcomes = pending
            .into_par_iter()
            .map(|entry| match entry {
                Pending::Check(job) => check_job(&job),
                Pending::Notice(notice) => Outcome::Notice(notice),
            })
            .collect();

        RunResult::new(outcomes)
    }

    fn discover(&self, roots: &[ScanRoot]) -> Vec<Pending> {
        let mut pending = Vec::new();

        for root in roots {
            let path = &root.path;
            if path.is_dir() {
                self.discover_dir(root, &mut pending);
            } else if path.is_file() {
                if root.exclude.is_excluded(path) {
                    tracing::trace!("excluded {}", path.display());
                    continue;
                }
                match self.classifier.classify(path) {
                    Some(category) => pending.push(Pending::Check(FileJob::new(path, category))),
                    None => pending.push(Pending::Notice(Notice::UnknownExtension(path.clone()))),
                }
            } else {
                pending.push(Pending::Notice(Notice::UnknownFileType(path.clone())));
            }
        }

        pending
    }

    /// Classify files as the walker streams them in.
    fn discover_dir(&self, root: &ScanRoot, pending: &mut Vec<Pending>) {
        let (files, handle) = walker::walk(&root.path);

        for path in files.iter() {
            if root.exclude.is_excluded(&path) {
                tracing::trace!("excluded {}", path.display());
                continue;
            }
            match self.classifier.classify(&path) {
                Some(category) => pending.push(Pending::Check(FileJob::new(path, category))),
                None => tracing::trace!("skipping unrecognized {}", path.display()),
            }
        }

        let stats = handle.join();
        tracing::debug!(
            "walked {}: {} files, {} errors",
            root.path.display(),
            stats.files_found,
            stats.errors
        );
    }
}

fn check_job(job: &FileJob) -> Outcome {
    match job.check() {
        Ok(report) => Outcome::Report(report),
        Err(err) => {
            tracing::warn!("cannot read {}: {}", job.path.display(), err);
            let message = match err {
                Error::Io { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            Outcome::Notice(Notice::Unreadable {
                path: job.path.clone(),
                message,
            })
        }
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
