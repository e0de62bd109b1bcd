// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Every scanned root finds its own ccheck.toml, searching upward from the
//! root (or from the directory holding a file root) and stopping at the
//! first directory that contains `.git`. The process working directory
//! only matters for resolving relative roots.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name.
pub const CONFIG_FILE: &str = "ccheck.toml";

/// A scan root paired with the config file that governs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootConfig {
    pub root: PathBuf,
    pub config: Option<PathBuf>,
}

/// Search `start` and its ancestors for ccheck.toml, up to the git root.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Directory the upward search begins at for `root`.
///
/// Relative roots are resolved against `cwd` and canonicalized when they
/// exist, so `..` climbs the real tree.
pub fn search_start(root: &Path, cwd: &Path) -> PathBuf {
    let joined = cwd.join(root);
    let absolute = joined.canonicalize().unwrap_or(joined);
    if absolute.is_dir() {
        return absolute;
    }
    match absolute.parent() {
        Some(parent) => parent.to_path_buf(),
        None => absolute,
    }
}

/// Pair every root with its config file.
///
/// An explicit config (`-C` or `CCHECK_CONFIG`) governs all roots and must
/// exist. Otherwise each root is searched for independently.
pub fn resolve_roots(
    explicit: Option<&Path>,
    roots: &[PathBuf],
    cwd: &Path,
) -> Result<Vec<RootConfig>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        return Ok(roots
            .iter()
            .map(|root| RootConfig {
                root: root.clone(),
                config: Some(path.to_path_buf()),
            })
            .collect());
    }

    Ok(roots
        .iter()
        .map(|root| {
            let config = find_config(&search_start(root, cwd));
            tracing::trace!("config for {}: {:?}", root.display(), config);
            RootConfig {
                root: root.clone(),
                config,
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
