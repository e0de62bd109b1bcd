// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line width limit.
//!
//! Only the width half of a category's [`Limits`](crate::category::Limits)
//! is checked; the line-count limit is carried in the table but not applied.

use crate::check::CheckContext;

/// Tab stop interval used when measuring width.
pub const TAB_SIZE: usize = 8;

/// Length of `line` after expanding tabs to [`TAB_SIZE`] stops.
///
/// A carriage return restarts the column, as a line terminator would.
pub fn expanded_width(line: &str) -> usize {
    let mut width = 0;
    let mut column = 0;

    for ch in line.chars() {
        match ch {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                width += pad;
                column += pad;
            }
            '\r' | '\n' => {
                width += 1;
                column = 0;
            }
            _ => {
                width += 1;
                column += 1;
            }
        }
    }

    width
}

pub fn check(line: &str, max_width: usize, ctx: &mut CheckContext) {
    let width = expanded_width(line);
    if width > max_width {
        ctx.report(format!("line is too wide ({width} - max {max_width})"));
    }
}

#[cfg(test)]
#[path = "width_tests.rs"]
mod tests;
