// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-increment/decrement used as a statement.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::CheckContext;

/// Indented identifier followed by `++`/`--` and the terminator.
#[allow(clippy::expect_used)]
static POST_STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\w+[+-]{2};").expect("valid regex"));

pub(super) fn check(line: &str, ctx: &mut CheckContext) {
    let Some(m) = POST_STEP.find(line) else {
        return;
    };

    let statement = m.as_str();
    if statement.contains("++") {
        ctx.report(format!("Use pre-increment: {statement}"));
    } else {
        ctx.report(format!("Use pre-decrement: {statement}"));
    }
}

#[cfg(test)]
#[path = "increment_tests.rs"]
mod tests;
