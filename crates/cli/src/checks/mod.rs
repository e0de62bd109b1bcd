// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule registry.
//!
//! Every line is run through [`COMMON_RULES`] first, then through the rules
//! of its category (see [`crate::category::Category::rules`]), then through
//! the width check. Rules never abort: each one runs regardless of what
//! earlier rules reported on the same line.

mod brackets;
mod comments;
mod hex;
mod increment;
mod indent;
mod line_ending;
mod termination;
mod whitespace;
pub mod width;

use crate::check::CheckContext;

/// A single line-oriented style rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Trailing whitespace and runs of blank lines.
    Whitespace,
    /// Doubled or space-separated statement terminators.
    Termination,
    /// Hex literals must use lowercase digits.
    HexLowercase,
    /// Standalone `x++;` / `x--;` statements.
    PreIncrement,
    /// Carriage return before the line terminator.
    LineEnding,
    /// Control keyword spacing and `} else` placement.
    Brackets,
    /// `//` comments.
    CppComment,
    /// `/* ... */` comments.
    BlockComment,
    /// Indentation with spaces where a tab is expected.
    IndentTab,
    /// Indentation with a tab where spaces are expected.
    IndentSpace,
}

/// Rules applied to every category, in order.
pub const COMMON_RULES: &[Rule] = &[
    Rule::Whitespace,
    Rule::Termination,
    Rule::HexLowercase,
    Rule::PreIncrement,
    Rule::LineEnding,
];

impl Rule {
    /// Stable identifier.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Whitespace => "whitespace",
            Rule::Termination => "termination",
            Rule::HexLowercase => "hex-lowercase",
            Rule::PreIncrement => "pre-increment",
            Rule::LineEnding => "line-ending",
            Rule::Brackets => "brackets",
            Rule::CppComment => "cpp-comment",
            Rule::BlockComment => "block-comment",
            Rule::IndentTab => "indent-tab",
            Rule::IndentSpace => "indent-space",
        }
    }

    /// Evaluate the rule against one line (terminator already stripped).
    pub fn evaluate(self, line: &str, ctx: &mut CheckContext) {
        match self {
            Rule::Whitespace => whitespace::check(line, ctx),
            Rule::Termination => termination::check(line, ctx),
            Rule::HexLowercase => hex::check(line, ctx),
            Rule::PreIncrement => increment::check(line, ctx),
            Rule::LineEnding => line_ending::check(line, ctx),
            Rule::Brackets => brackets::check(line, ctx),
            Rule::CppComment => comments::check_cpp(line, ctx),
            Rule::BlockComment => comments::check_block(line, ctx),
            Rule::IndentTab => indent::check_tab(line, ctx),
            Rule::IndentSpace => indent::check_space(line, ctx),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
