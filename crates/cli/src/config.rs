// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles ccheck.toml parsing with version validation and unknown key warnings.
//!
//! ```toml
//! version = 1
//! exclude = ["/vendor/", "_gen."]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Only supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    exclude: Vec<String>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Path substrings to skip, added to any given on the command line.
    pub exclude: Vec<String>,
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("cannot read config: {e}"),
        path: Some(path.to_path_buf()),
    })?;

    parse(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in flexible.unknown.keys() {
        warn_unknown_key(path, key);
    }

    Ok(Config {
        version,
        exclude: flexible.exclude,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("unknown config key `{}` in {}", key, path.display());
    eprintln!(
        "ccheck: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
