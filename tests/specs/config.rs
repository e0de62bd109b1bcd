// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ccheck.toml discovery and loading.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn discovered_config_adds_excludes() {
    let temp = Project::empty();
    temp.config("exclude = [\"vendor/\"]\n");
    temp.file("vendor/x.c", "bad;;\n");
    temp.file("src/y.c", "int y;\n");

    cli().pwd(temp.path()).args(&["-q"]).passes();
}

#[test]
fn config_found_from_subdirectory() {
    let temp = Project::empty();
    temp.config("exclude = [\"gen\"]\n");
    temp.file("src/gen/x.c", "bad;;\n");

    cli()
        .pwd(temp.path().join("src"))
        .args(&["-q"])
        .passes();
}

#[test]
fn cli_and_config_excludes_combine() {
    let temp = Project::empty();
    temp.config("exclude = [\"a/\"]\n");
    temp.file("a/x.c", "bad;;\n");
    temp.file("b/y.c", "bad;;\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "-e", "b/"])
        .passes();
}

#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\nexclude = [\"skip\"]\n");
    temp.file("skip/x.c", "bad;;\n");

    cli()
        .pwd(temp.path())
        .args(&["-q", "-C", "custom.toml"])
        .passes();
}

#[test]
fn config_from_environment() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\nexclude = [\"skip\"]\n");
    temp.file("skip/x.c", "bad;;\n");

    cli()
        .pwd(temp.path())
        .env("CCHECK_CONFIG", "custom.toml")
        .args(&["-q"])
        .passes();
}

#[test]
fn unsupported_version_is_config_error() {
    let temp = Project::empty();
    temp.file("ccheck.toml", "version = 2\n");

    cli()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn malformed_config_is_config_error() {
    let temp = Project::empty();
    temp.file("ccheck.toml", "version = [\n");

    cli().pwd(temp.path()).exits(2).stderr_has("ccheck: config error");
}

#[test]
fn unknown_key_warns_and_continues() {
    let temp = Project::empty();
    temp.config("max_width = 120\n");
    temp.file("a.c", "int a;\n");

    cli()
        .pwd(temp.path())
        .args(&["-q"])
        .passes()
        .stderr_has("unrecognized field `max_width`");
}

#[test]
fn scanned_root_uses_its_own_config_from_elsewhere() {
    let project = Project::empty();
    project.config("exclude = [\"gen/\"]\n");
    project.file("gen/a.c", "x;;\n");
    let elsewhere = Project::empty();

    let root = project.path().to_str().unwrap();
    cli().pwd(elsewhere.path()).args(&["-q", root]).passes();
}

#[test]
fn file_root_finds_config_above_it() {
    let project = Project::empty();
    project.config("exclude = [\"gen/\"]\n");
    project.file("gen/a.c", "x;;\n");
    let elsewhere = Project::empty();

    let file = project.path().join("gen/a.c");
    cli()
        .pwd(elsewhere.path())
        .args(&["-q", file.to_str().unwrap()])
        .passes();
}

#[test]
fn working_directory_config_does_not_leak_into_other_roots() {
    let here = Project::empty();
    here.config("exclude = [\"gen/\"]\n");
    let other = Project::empty();
    other.file("gen/a.c", "x;;\n");

    let bad = other.path().join("gen/a.c");
    cli()
        .pwd(here.path())
        .args(&["-q", other.path().to_str().unwrap()])
        .fails()
        .stderr_has(format!("{}:1: has double semicolon", bad.display()).as_str());
}

#[test]
fn each_root_applies_its_own_excludes() {
    let first = Project::empty();
    first.config("exclude = [\"gen/\"]\n");
    first.file("gen/a.c", "x;;\n");
    let second = Project::empty();
    second.file("gen/b.c", "x;;\n");

    cli()
        .args(&[
            "-q",
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ])
        .fails()
        .stderr_has("gen/b.c:1: has double semicolon")
        .stderr_lacks("gen/a.c");
}
