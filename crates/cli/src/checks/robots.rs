// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! robots.txt check.
//!
//! Substring heuristics only; user-agent groups are not resolved.

use crate::check::{Check, CheckContext, Findings};
use crate::file_reader::read_lossy;

/// The robots check validates public/robots.txt.
pub struct RobotsCheck;

impl Check for RobotsCheck {
    fn name(&self) -> &'static str {
        "robots"
    }

    fn description(&self) -> &'static str {
        "robots.txt presence, sitemap reference and allow rules"
    }

    fn run(&self, ctx: &CheckContext) -> crate::Result<Findings> {
        let relative = &ctx.config.paths.robots;
        let Some(text) = read_lossy(&ctx.root.join(relative))? else {
            return Ok(Findings::single_error(format!("{} missing", relative.display())));
        };
        Ok(check_robots_txt(&text, ctx.config.base()))
    }
}

/// Apply the robots.txt rules to file content.
pub fn check_robots_txt(text: &str, base: &str) -> Findings {
    let mut findings = Findings::new();
    if !text.to_lowercase().contains("sitemap") {
        findings.warn(format!(
            "robots.txt should reference Sitemap (e.g. Sitemap: {base}/sitemap.xml)"
        ));
    }
    if text.contains("Disallow:") && !text.contains("Allow: /") {
        findings.warn("Ensure main content is allowed (Allow: /)");
    }
    findings
}

#[cfg(test)]
#[path = "robots_tests.rs"]
mod tests;
