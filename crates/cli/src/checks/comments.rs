// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comment style rules.
//!
//! C sources must not use `//` comments; m4 files must not use `/* */`.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::CheckContext;

/// Quote-delimited text spanning a `//`, as in a string literal URL.
#[allow(clippy::expect_used)]
static QUOTED_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""+.*//.*"+"#).expect("valid regex"));

pub(super) fn check_cpp(line: &str, ctx: &mut CheckContext) {
    let Some(index) = line.find("//") else {
        return;
    };

    // `scheme://` and friends; nothing precedes a `//` at column 0
    if line[..index].ends_with(':') {
        return;
    }

    if QUOTED_SLASHES.is_match(line) {
        return;
    }

    ctx.report("C++ comment, use C comments /* ... */ instead");
}

/// Stateful across lines: a line containing `/*` opens, a later (or the
/// same) line containing `*/` closes and reports.
pub(super) fn check_block(line: &str, ctx: &mut CheckContext) {
    if line.contains("/*") {
        ctx.comment_depth += 1;
    }

    if line.contains("*/") {
        let was_open = ctx.comment_depth > 0;
        ctx.comment_depth = 0;
        if was_open {
            ctx.report("C comment, use Perl-style comments # ... instead");
        }
    }
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
