// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::check::CheckContext;

/// Lines are split on `\n` only, so a DOS line keeps its `\r`.
pub(super) fn check(line: &str, ctx: &mut CheckContext) {
    if line.ends_with('\r') {
        ctx.report("not in Unix format");
    }
}

#[cfg(test)]
#[path = "line_ending_tests.rs"]
mod tests;
