// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::LazyLock;

use regex::Regex;

use crate::check::CheckContext;

#[allow(clippy::expect_used)]
static HEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x([0-9A-Fa-f]+)").expect("valid regex"));

/// Only the first hex literal on a line is inspected.
pub(super) fn check(line: &str, ctx: &mut CheckContext) {
    let Some(digits) = HEX_LITERAL.captures(line).and_then(|c| c.get(1)) else {
        return;
    };

    let digits = digits.as_str();
    if digits.bytes().any(|b| matches!(b, b'A'..=b'F')) {
        ctx.report(format!("0x{digits} should be lowercase"));
    }
}

#[cfg(test)]
#[path = "hex_tests.rs"]
mod tests;
