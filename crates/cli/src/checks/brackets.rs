// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bracket style for C-like control statements.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::CheckContext;

/// Keywords that take a parenthesized condition.
const CONTROL_KEYWORDS: &[&str] = &["do", "if", "for", "while", "switch"];

/// First word, plus any non-word run, directly before a `(`.
#[allow(clippy::expect_used)]
static CALL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+\W*)\(").expect("valid regex"));

#[allow(clippy::expect_used)]
static BRACE_ELSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\}\s*else").expect("valid regex"));

pub(super) fn check(line: &str, ctx: &mut CheckContext) {
    if let Some(token) = CALL_TOKEN.captures(line).and_then(|c| c.get(1)) {
        let token = token.as_str();
        if CONTROL_KEYWORDS.contains(&token.trim()) && !token.contains(' ') {
            ctx.report(format!("no single space after operator '{token}()'"));
        }
    }

    if BRACE_ELSE.is_match(line) {
        ctx.report("else: ending if bracket should be on previous line");
    }
}

#[cfg(test)]
#[path = "brackets_tests.rs"]
mod tests;
