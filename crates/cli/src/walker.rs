// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive directory walking.
//!
//! Uses the `ignore` crate with every standard filter disabled: hidden
//! files are visited, ignore files are not honoured and symlinks are not
//! followed. Siblings are yielded in file-name order.

use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, bounded};
use ignore::WalkBuilder;

/// Paths buffered ahead of the consumer before the walk blocks.
const CHANNEL_CAPACITY: usize = 1000;

/// Statistics from a walk operation.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Total files discovered.
    pub files_found: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Walk `root` on a background thread, streaming file paths as they are found.
///
/// Paths keep `root` as their prefix. Dropping the receiver stops the walk
/// at the next file.
pub fn walk(root: &Path) -> (Receiver<PathBuf>, WalkHandle) {
    let (tx, rx) = bounded(CHANNEL_CAPACITY);

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let handle = std::thread::spawn(move || send_files(builder, &tx));
    (rx, WalkHandle { handle })
}

fn send_files(builder: WalkBuilder, tx: &Sender<PathBuf>) -> WalkStats {
    let mut stats = WalkStats::default();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("walk error: {}", err);
                stats.errors += 1;
                continue;
            }
        };

        // Symlinked files count; symlinked directories are not entered.
        let is_file = entry.file_type().is_some_and(|t| t.is_file())
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        stats.files_found += 1;
        if tx.send(entry.into_path()).is_err() {
            tracing::trace!("receiver dropped, stopping walk");
            break;
        }
    }

    stats
}

/// Handle to a running walk.
pub struct WalkHandle {
    handle: JoinHandle<WalkStats>,
}

impl WalkHandle {
    /// Wait for the walk to finish and return its stats.
    pub fn join(self) -> WalkStats {
        self.handle.join().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
