// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output and run statistics.
//!
//! Diagnostics and notices go to stderr, one per line:
//! ```text
//! <path>:<line>: <message>
//! ```
//! The statistics block goes to stdout.

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::category::Category;
use crate::check::{Diagnostic, FileReport};
use crate::color::scheme;
use crate::scan::{Notice, Outcome};

/// Per-category file counts and the diagnostic total.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    files: [usize; Category::ALL.len()],

    /// Diagnostics reported across all files.
    pub errors: usize,
}

impl RunStats {
    /// Count a checked file and its diagnostics.
    pub fn record(&mut self, report: &FileReport) {
        self.files[report.category.index()] += 1;
        self.errors += report.diagnostics.len();
    }

    /// Files processed in `category`.
    pub fn files(&self, category: Category) -> usize {
        self.files[category.index()]
    }

    pub fn total_files(&self) -> usize {
        self.files.iter().sum()
    }
}

/// Write the statistics block.
///
/// Every category appears, in table order, even when its count is zero.
pub fn write_stats<W: Write>(out: &mut W, stats: &RunStats) -> io::Result<()> {
    writeln!(out, "Statistics:")?;
    writeln!(out, "~~~~~~~~~~~")?;
    write!(out, "Number of files processed:    ")?;
    for category in Category::ALL {
        write!(out, " {}: {} ", category.id(), stats.files(category))?;
    }
    writeln!(out)?;
    writeln!(out, "Number of lines with errors:   {}", stats.errors)?;
    writeln!(out)?;
    Ok(())
}

/// Streams diagnostics and notices with optional color.
pub struct Reporter<W> {
    out: W,
}

impl Reporter<StandardStream> {
    /// Reporter writing to stderr.
    pub fn stderr(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stderr(color_choice))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write every outcome in order. Passing files produce no output.
    pub fn write_outcomes(&mut self, outcomes: &[Outcome]) -> io::Result<()> {
        for outcome in outcomes {
            match outcome {
                Outcome::Report(report) => {
                    for diagnostic in &report.diagnostics {
                        self.write_diagnostic(diagnostic)?;
                    }
                }
                Outcome::Notice(notice) => self.write_notice(notice)?,
            }
        }
        self.out.flush()
    }

    pub fn write_diagnostic(&mut self, d: &Diagnostic) -> io::Result<()> {
        // File path in cyan
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", d.path.display())?;
        self.out.reset()?;

        // Line number in yellow
        write!(self.out, ":")?;
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}", d.line)?;
        self.out.reset()?;

        writeln!(self.out, ": {}", d.message)
    }

    pub fn write_notice(&mut self, notice: &Notice) -> io::Result<()> {
        writeln!(self.out, "{notice}")
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
