// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source tree walking.
//!
//! Collects the component source files under a directory that match a set of
//! glob patterns. Ignore files are not consulted: every file in the tree is a
//! candidate, like a recursive glob.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Compile glob patterns into a matcher.
pub fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| Error::Pattern { pattern: pattern.clone(), source })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| Error::Pattern { pattern: patterns.join(", "), source })
}

/// List files under `dir` whose path relative to `dir` matches `include`.
///
/// Returns paths in sorted order. A missing directory yields an empty list.
pub fn collect_files(dir: &Path, include: &GlobSet) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(dir).standard_filters(false).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let relative = path.strip_prefix(dir).unwrap_or(&path);
        if include.is_match(relative) {
            files.push(path);
        }
    }
    files.sort();
    tracing::debug!("{} matching files under {}", files.len(), dir.display());
    files
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
