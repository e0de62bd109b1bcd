// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trailing whitespace and blank-line runs.

use crate::check::CheckContext;

/// Longest allowed run of empty lines.
const MAX_EMPTY_LINES: u32 = 2;

pub(super) fn check(line: &str, ctx: &mut CheckContext) {
    if line.ends_with(' ') {
        ctx.report("has trailing space(s)");
    } else if line.ends_with('\t') {
        ctx.report("has trailing tab(s)");
    }

    if line.is_empty() {
        ctx.empty_lines += 1;
    } else {
        ctx.empty_lines = 0;
    }

    // The run restarts after each report, so six blank lines report twice.
    if ctx.empty_lines > MAX_EMPTY_LINES {
        let run = ctx.empty_lines;
        ctx.report(format!("should have maximum two empty lines ({run})"));
        ctx.empty_lines = 0;
    }
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
