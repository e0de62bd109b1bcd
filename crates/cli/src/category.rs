// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File categories and path classification.
//!
//! Each category carries its file-name globs, the rules run on top of the
//! common ones, and its size limits. Categories are tried in the order of
//! [`Category::ALL`]; the first category with a matching glob wins.
//!
//! Globs are compiled by `globset` with default options: matching is
//! case-sensitive (`*.S` and `*.s` are distinct) and `*` also matches path
//! separators, so a pattern is tested against the whole path as given.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::checks::Rule;
use crate::error::{Error, Result};

/// A file-type bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    C,
    Cpp,
    Header,
    Makefile,
    M4,
    Python,
    ObjectiveC,
    Assembly,
    Java,
    Php,
}

/// Per-category size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum expanded line width.
    pub max_width: usize,
    /// Maximum number of lines per file. Declared but not enforced.
    pub max_lines: usize,
}

impl Limits {
    const fn new(max_width: usize, max_lines: usize) -> Self {
        Self {
            max_width,
            max_lines,
        }
    }
}

impl Category {
    /// All categories in classification order.
    pub const ALL: [Category; 10] = [
        Category::C,
        Category::Cpp,
        Category::Header,
        Category::Makefile,
        Category::M4,
        Category::Python,
        Category::ObjectiveC,
        Category::Assembly,
        Category::Java,
        Category::Php,
    ];

    /// Short identifier used in statistics.
    pub fn id(self) -> &'static str {
        match self {
            Category::C => "c",
            Category::Cpp => "cpp",
            Category::Header => "h",
            Category::Makefile => "mk",
            Category::M4 => "m4",
            Category::Python => "py",
            Category::ObjectiveC => "m",
            Category::Assembly => "s",
            Category::Java => "java",
            Category::Php => "php",
        }
    }

    /// File-name globs, in match order.
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Category::C => &["*.c"],
            Category::Cpp => &["*.cpp", "*.cc"],
            Category::Header => &["*.h"],
            Category::Makefile => &["*Makefile", "*.mk"],
            Category::M4 => &["*.m4"],
            Category::Python => &["*.py"],
            Category::ObjectiveC => &["*.m"],
            Category::Assembly => &["*.s", "*.S"],
            Category::Java => &["*.java"],
            Category::Php => &["*.php"],
        }
    }

    /// Rules run after the common rules, in order.
    pub fn rules(self) -> &'static [Rule] {
        use Rule::*;

        match self {
            Category::C => &[Brackets, CppComment, IndentTab],
            Category::Cpp => &[Brackets, IndentTab],
            Category::Header => &[Brackets, IndentTab],
            Category::Makefile => &[IndentTab],
            Category::M4 => &[Brackets, BlockComment, IndentTab],
            Category::Python => &[Brackets, IndentSpace],
            Category::ObjectiveC => &[Brackets, CppComment, IndentTab],
            Category::Assembly => &[IndentTab, CppComment],
            Category::Java => &[Brackets, IndentTab],
            Category::Php => &[Brackets, IndentTab],
        }
    }

    pub fn limits(self) -> Limits {
        match self {
            Category::Header | Category::Makefile => Limits::new(79, 1000),
            Category::Java | Category::Php => Limits::new(179, 3000),
            _ => Limits::new(79, 3000),
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Matches paths against the category table.
pub struct Classifier {
    sets: Vec<(Category, GlobSet)>,
}

impl Classifier {
    /// Compile the globs of every category.
    pub fn new() -> Result<Self> {
        let sets = Category::ALL
            .iter()
            .map(|&category| Ok((category, build_set(category.patterns())?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sets })
    }

    /// First category whose globs match `path`, if any.
    pub fn classify(&self, path: &Path) -> Option<Category> {
        self.sets
            .iter()
            .find(|(_, set)| set.is_match(path))
            .map(|(category, _)| *category)
    }
}

fn build_set(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| Error::Internal(format!("invalid glob pattern '{pattern}': {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::Internal(format!("cannot build glob set: {e}")))
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
