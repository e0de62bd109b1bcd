// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default: color only if stderr is a TTY

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve color choice for diagnostic output on stderr.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    choose(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("COLOR").is_some(),
        std::io::stderr().is_terminal(),
    )
}

fn choose(no_color: bool, force_color: bool, is_terminal: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Color scheme for diagnostics.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow line number.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
