// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented source style checker.

pub mod category;
pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod report;
pub mod runner;
pub mod scan;
pub mod walker;

pub use category::{Category, Classifier, Limits};
pub use check::{CheckContext, Diagnostic, FileReport};
pub use checks::Rule;
pub use error::{Error, ExitCode, Result};
pub use report::{Reporter, RunStats};
pub use scan::{ExcludeFilter, Notice, Outcome, RunResult, ScanRoot, Scanner};
pub use walker::{WalkHandle, WalkStats};
