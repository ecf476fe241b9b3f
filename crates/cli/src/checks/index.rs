// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Root markup (index.html) meta check.
//!
//! Validates title and description length, canonical URL, meta robots and the
//! social sharing tags of the project's root HTML file.

use crate::check::{Check, CheckContext, Findings, is_absolute_url};
use crate::file_reader::read_lossy;
use crate::meta::MetaRecord;

use super::{SOCIAL_IMAGES, check_description_length, check_title_length, truncate};

/// The index check validates the meta tags of the root markup file.
pub struct IndexCheck;

impl Check for IndexCheck {
    fn name(&self) -> &'static str {
        "index"
    }

    fn description(&self) -> &'static str {
        "Title, description, canonical and social meta tags of index.html"
    }

    fn run(&self, ctx: &CheckContext) -> crate::Result<Findings> {
        let path = ctx.root.join(&ctx.config.paths.index);
        let Some(html) = read_lossy(&path)? else {
            return Ok(Findings::single_error(format!(
                "{} not found",
                ctx.config.paths.index.display()
            )));
        };
        Ok(check_meta(&MetaRecord::extract(&html), ctx))
    }
}

/// Apply the root markup rules to extracted meta.
pub fn check_meta(meta: &MetaRecord, ctx: &CheckContext) -> Findings {
    let config = ctx.config;
    let base = config.base();
    let mut findings = Findings::new();

    match meta.title.as_deref() {
        None => findings.error("Missing <title>"),
        Some(title) => check_title_length(title, &config.title, &mut findings),
    }

    match meta.description.as_deref() {
        None => findings.error("Missing meta description"),
        Some(desc) => check_description_length(desc, &config.description, &mut findings),
    }

    match meta.canonical.as_deref() {
        None => findings.error("Missing canonical URL"),
        Some(url) if !is_absolute_url(url) => {
            findings.warn(format!("Canonical should be absolute URL (e.g. {base}/)"))
        }
        Some(_) => {}
    }

    if meta.robots.is_none() {
        findings.warn("Consider adding meta robots (e.g. index, follow)");
    }

    for (key, label) in SOCIAL_IMAGES {
        match meta.get(key) {
            None => findings.warn(format!("Missing {label} for social sharing")),
            Some(url) if url.starts_with('/') || !is_absolute_url(url) => findings.error(format!(
                "{label} must be absolute URL (e.g. {base}/logo.png), got: {}",
                truncate(url, 50)
            )),
            Some(_) => {}
        }
    }

    if !meta.og_url.as_deref().is_some_and(is_absolute_url) {
        findings.warn(format!("og:url should be absolute (e.g. {base}/)"));
    }

    findings
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
