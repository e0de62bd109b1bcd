// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ccheck CLI entry point.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ccheck::cli::{Cli, version_line};
use ccheck::config::{self, Config};
use ccheck::discovery::{self, RootConfig};
use ccheck::error::ExitCode;
use ccheck::report::{Reporter, write_stats};
use ccheck::scan::{ExcludeFilter, ScanRoot, Scanner};

fn init_logging() {
    let filter = EnvFilter::try_from_env("CCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ccheck: {}", e);
            match e.downcast_ref::<ccheck::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return Ok(ExitCode::Success);
    }

    let cwd = std::env::current_dir()?;
    let roots = scan_roots(&cli, &cwd)?;

    let result = Scanner::new()?.scan(&roots);
    tracing::debug!(
        "checked {} file(s), {} diagnostic(s)",
        result.stats.total_files(),
        result.stats.errors
    );

    Reporter::stderr(ccheck::color::resolve_color()).write_outcomes(&result.outcomes)?;

    if !cli.quiet {
        let mut stdout = std::io::stdout().lock();
        write_stats(&mut stdout, &result.stats)?;
        stdout.flush()?;
    }

    Ok(ExitCode::from_error_count(result.stats.errors))
}

/// Pair each root with its exclude list: the command line's plus its config's.
///
/// A config shared by several roots is loaded once.
fn scan_roots(cli: &Cli, cwd: &Path) -> anyhow::Result<Vec<ScanRoot>> {
    let resolved = discovery::resolve_roots(cli.config.as_deref(), &cli.roots(), cwd)?;
    let mut loaded: BTreeMap<PathBuf, Config> = BTreeMap::new();
    let mut roots = Vec::with_capacity(resolved.len());

    for RootConfig { root, config: config_path } in resolved {
        let mut exclude = cli.exclude.clone();
        match config_path {
            Some(path) => {
                let config = match loaded.entry(path) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        tracing::debug!("loading config from {}", entry.key().display());
                        let parsed = config::load(entry.key())?;
                        entry.insert(parsed)
                    }
                };
                exclude.extend(config.exclude.iter().cloned());
            }
            None => tracing::debug!("no config for {}, using defaults", root.display()),
        }
        roots.push(ScanRoot::new(root, ExcludeFilter::new(exclude)));
    }

    Ok(roots)
}
