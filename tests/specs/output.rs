// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Statistics block, quiet mode and colors.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn statistics_block_on_clean_fixture() {
    cli().on("style-clean").passes().stderr_eq("").stdout_eq(
        "Statistics:\n\
         ~~~~~~~~~~~\n\
         Number of files processed:     c: 1  cpp: 0  h: 0  mk: 1  m4: 0  py: 1  m: 0  s: 0  java: 0  php: 0 \n\
         Number of lines with errors:   0\n\
         \n",
    );
}

#[test]
fn statistics_count_diagnostics() {
    cli()
        .on("style-violations")
        .fails()
        .stdout_has("Number of files processed:     c: 1  cpp: 0  h: 0  mk: 1  m4: 1 ")
        .stdout_has("Number of lines with errors:   10\n");
}

#[test]
fn quiet_suppresses_statistics() {
    cli().on("style-clean").args(&["-q"]).passes().stdout_eq("");
}

#[test]
fn quiet_keeps_diagnostics() {
    cli()
        .on("style-violations")
        .args(&["--quiet"])
        .fails()
        .stdout_eq("")
        .stderr_has("./src/bad.c:7: has double semicolon");
}

#[test]
fn empty_directory_reports_zero_files() {
    let temp = Project::empty();

    cli()
        .pwd(temp.path())
        .passes()
        .stdout_has("Number of files processed:     c: 0 ")
        .stdout_has("Number of lines with errors:   0\n");
}

#[test]
fn no_color_when_piped() {
    cli()
        .on("style-violations")
        .args(&["-q"])
        .fails()
        .stderr_lacks("\x1b[");
}

#[test]
fn color_env_forces_color() {
    cli()
        .on("style-violations")
        .args(&["-q"])
        .env("COLOR", "1")
        .fails()
        .stderr_has("\x1b[")
        .stderr_has("has double semicolon");
}

#[test]
fn no_color_env_wins_over_color() {
    cli()
        .on("style-violations")
        .args(&["-q"])
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .fails()
        .stderr_lacks("\x1b[");
}

#[test]
fn statistics_never_colored() {
    cli()
        .on("style-clean")
        .env("COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

#[test]
fn log_output_goes_to_stderr() {
    cli()
        .on("style-clean")
        .env("CCHECK_LOG", "debug")
        .passes()
        .stdout_has("Statistics:")
        .stderr_has("no config found");
}
