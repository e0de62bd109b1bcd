// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Statement terminator checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::CheckContext;

/// A token, then blanks, then the terminator at end of line.
#[allow(clippy::expect_used)]
static SPACED_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+[ \t]+;$").expect("valid regex"));

pub(super) fn check(line: &str, ctx: &mut CheckContext) {
    if line.len() < 2 {
        return;
    }

    if line.ends_with(";;") {
        ctx.report("has double semicolon");
    }

    if line.ends_with(" ;") && SPACED_TERMINATOR.is_match(line) {
        ctx.report("has spaces before terminator");
    }
}

#[cfg(test)]
#[path = "termination_tests.rs"]
mod tests;
