// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Indentation style.

use crate::check::CheckContext;

/// Space-indent widths that should have been tabs.
const TAB_WIDTHS: [usize; 4] = [4, 8, 12, 16];

pub(super) fn check_tab(line: &str, ctx: &mut CheckContext) {
    let bytes = line.as_bytes();
    for n in TAB_WIDTHS {
        if bytes.len() > n && bytes[..n].iter().all(|&b| b == b' ') && bytes[n] != b' ' {
            ctx.report(format!("starts with {n} spaces, use tab instead"));
        }
    }
}

/// A lone tab is left to the trailing-whitespace rule.
pub(super) fn check_space(line: &str, ctx: &mut CheckContext) {
    if line.len() > 1 && line.starts_with('\t') {
        ctx.report("starts with TAB, use 4 spaces instead");
    }
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod tests;
