// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Check C-family, make, m4 and Python sources against the house coding style
#[derive(Parser)]
#[command(name = "ccheck", long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Files or directories to check [default: .]
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only print diagnostics, no statistics
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip paths containing SUBSTRING (repeatable)
    #[arg(short, long, value_name = "SUBSTRING")]
    pub exclude: Vec<String>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "CCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    pub version: bool,
}

impl Cli {
    /// Roots to scan; the current directory when none were given.
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }
}

/// Text printed for `--version`.
pub fn version_line() -> String {
    format!(
        "ccheck version {}, written by {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    )
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
