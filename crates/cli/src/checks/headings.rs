// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heading hierarchy check.
//!
//! Counts `<h1>` tags across all page components. The count is aggregated over
//! the whole tree, so two pages with one H1 each are reported as multiple H1s.

use crate::check::{Check, CheckContext, Findings};
use crate::file_reader::read_lossy;
use crate::meta::count_h1;
use crate::walker::{build_glob_set, collect_files};

/// The headings check validates that exactly one H1 exists.
pub struct HeadingsCheck;

impl Check for HeadingsCheck {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn description(&self) -> &'static str {
        "Single H1 across page components"
    }

    fn run(&self, ctx: &CheckContext) -> crate::Result<Findings> {
        let source = ctx.root.join(&ctx.config.paths.source);
        if !source.is_dir() {
            return Ok(Findings::new());
        }

        let include = build_glob_set(&ctx.config.headings.include)?;
        let mut h1_count = 0;
        for path in collect_files(&source, &include) {
            if let Some(text) = read_lossy(&path)? {
                h1_count += count_h1(&text);
            }
        }

        let mut findings = Findings::new();
        if h1_count == 0 {
            findings.error(format!(
                "No H1 found in {}. Page should have exactly one H1.",
                ctx.config.paths.source.display()
            ));
        } else if h1_count > 1 {
            findings.warn(format!("Multiple H1s found ({h1_count}). Use a single H1 per page."));
        }
        Ok(findings)
    }
}

#[cfg(test)]
#[path = "headings_tests.rs"]
mod tests;
