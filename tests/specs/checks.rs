// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics produced for each file category.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn violations_fixture_reports_every_rule() {
    cli().on("style-violations").args(&["-q"]).fails().stderr_eq(
        "./build/rules.mk:2: starts with 4 spaces, use tab instead\n\
         ./m4/ax.m4:2: C comment, use Perl-style comments # ... instead\n\
         ./src/bad.c:4: 0x1F should be lowercase\n\
         ./src/bad.c:5: Use pre-increment: \tx++;\n\
         ./src/bad.c:6: no single space after operator 'if()'\n\
         ./src/bad.c:7: has double semicolon\n\
         ./src/bad.c:8: else: ending if bracket should be on previous line\n\
         ./src/bad.c:9: C++ comment, use C comments /* ... */ instead\n\
         ./src/bad.c:9: starts with 8 spaces, use tab instead\n\
         ./src/bad.c:11: has spaces before terminator\n",
    );
}

#[test]
fn trailing_space_and_python_tab() {
    let temp = Project::empty();
    temp.file("a.c", "int x;  \n");
    temp.file("b.py", "\tx = 1\n");

    cli()
        .pwd(temp.path())
        .fails()
        .stderr_eq(
            "./a.c:1: has trailing space(s)\n\
             ./b.py:1: starts with TAB, use 4 spaces instead\n",
        )
        .stdout_has(" c: 1 ")
        .stdout_has(" py: 1 ")
        .stdout_has("Number of lines with errors:   2\n");
}

#[test]
fn blank_line_runs() {
    let temp = Project::empty();
    temp.file("a.c", "int x;\n\n\n\n\n\n\nint y;\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "a.c"])
        .fails()
        .stderr_eq(
            "a.c:4: should have maximum two empty lines (3)\n\
             a.c:7: should have maximum two empty lines (3)\n",
        );
}

#[test]
fn dos_line_endings() {
    let temp = Project::empty();
    temp.file("a.h", "int x;\r\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "a.h"])
        .fails()
        .stderr_eq("a.h:1: not in Unix format\n");
}

#[test]
fn width_limit_depends_on_category() {
    let temp = Project::empty();
    let line = format!("{}\n", "x".repeat(100));
    temp.file("a.c", &line);
    temp.file("A.java", &line);

    cli()
        .pwd(temp.path())
        .args(&["-q", "a.c", "A.java"])
        .fails()
        .stderr_eq("a.c:1: line is too wide (100 - max 79)\n");
}

#[test]
fn tabs_expand_to_eight_columns() {
    let temp = Project::empty();
    temp.file("a.c", &format!("\t\t\t\t\t\t\t\t\t{}\n", "x".repeat(8)));

    cli()
        .pwd(temp.path())
        .args(&["-q", "a.c"])
        .fails()
        .stderr_eq("a.c:1: line is too wide (80 - max 79)\n");
}

#[test]
fn cpp_comments_allowed_outside_c_and_objc() {
    let temp = Project::empty();
    temp.file("a.cpp", "int x; // fine\n");
    temp.file("a.m", "int x; // flagged\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "a.cpp", "a.m"])
        .fails()
        .stderr_eq("a.m:1: C++ comment, use C comments /* ... */ instead\n");
}

#[test]
fn url_is_not_a_comment() {
    let temp = Project::empty();
    temp.file("a.c", "/* see http://example.com */\n");

    cli().pwd(temp.path()).args(&["-q", "a.c"]).passes();
}

#[test]
fn makefile_requires_tabs() {
    let temp = Project::empty();
    temp.file("Makefile", "all:\n    echo hi\n\techo ok\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "Makefile"])
        .fails()
        .stderr_eq("Makefile:2: starts with 4 spaces, use tab instead\n");
}

#[test]
fn m4_block_comment_across_lines() {
    let temp = Project::empty();
    temp.file("x.m4", "/*\n * note\n */\nAC_INIT\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "x.m4"])
        .fails()
        .stderr_eq("x.m4:3: C comment, use Perl-style comments # ... instead\n");
}

#[test]
fn assembly_checks_comments_and_indent() {
    let temp = Project::empty();
    temp.file("a.S", "    mov r0, r1 // x\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "a.S"])
        .fails()
        .stderr_eq(
            "a.S:1: starts with 4 spaces, use tab instead\n\
             a.S:1: C++ comment, use C comments /* ... */ instead\n",
        );
}
