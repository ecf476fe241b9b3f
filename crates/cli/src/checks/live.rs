// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live URL check.
//!
//! Fetches a deployed page and applies a relaxed version of the index rules to
//! the raw HTML. Every finding is prefixed with `[Live]`.

use crate::check::{Check, CheckContext, Findings, is_absolute_url};
use crate::config::Config;
use crate::fetch::Fetch;
use crate::meta::{MetaRecord, count_h1};

use super::SOCIAL_IMAGES;

/// Prefix marking findings from the live fetch.
pub const LIVE_PREFIX: &str = "[Live]";

/// The live check fetches a URL and validates its markup.
pub struct LiveCheck {
    url: String,
    fetcher: Box<dyn Fetch>,
}

impl LiveCheck {
    pub fn new(url: impl Into<String>, fetcher: Box<dyn Fetch>) -> Self {
        Self { url: url.into(), fetcher }
    }
}

impl Check for LiveCheck {
    fn name(&self) -> &'static str {
        "live"
    }

    fn description(&self) -> &'static str {
        "Meta tags and H1 of a fetched live page"
    }

    fn run(&self, ctx: &CheckContext) -> crate::Result<Findings> {
        let Some(html) = self.fetcher.fetch(&self.url) else {
            return Ok(Findings::single_error(format!(
                "{LIVE_PREFIX} Could not fetch URL (check network or URL)"
            )));
        };
        Ok(check_live_html(&html, ctx.config))
    }
}

/// Apply the live rules to fetched HTML.
pub fn check_live_html(html: &str, config: &Config) -> Findings {
    let meta = MetaRecord::extract(html);
    let title = &config.title;
    let desc = &config.description;
    let mut findings = Findings::new();

    match meta.title.as_deref().map(|t| t.chars().count()) {
        None => findings.error(format!("{LIVE_PREFIX} Missing <title>")),
        Some(len) if len > title.max => {
            findings.warn(format!("{LIVE_PREFIX} Title too long ({len} chars)"))
        }
        Some(len) if len < title.min && len >= title.short => findings.warn(format!(
            "{LIVE_PREFIX} Title short ({len} chars). Optimal {}-{}.",
            title.min, title.max
        )),
        Some(_) => {}
    }

    match meta.description.as_deref().map(|d| d.chars().count()) {
        None => findings.error(format!("{LIVE_PREFIX} Missing meta description")),
        Some(len) if len < desc.short || len > desc.long => findings.warn(format!(
            "{LIVE_PREFIX} Meta description length {len}. Optimal {}-{}.",
            desc.min, desc.max
        )),
        Some(_) => {}
    }

    if meta.canonical.is_none() {
        findings.warn(format!("{LIVE_PREFIX} No canonical URL"));
    }

    for (key, label) in SOCIAL_IMAGES {
        if let Some(url) = meta.get(key)
            && (url.starts_with('/') || !is_absolute_url(url))
        {
            findings.error(format!("{LIVE_PREFIX} {label} should be absolute URL"));
        }
    }

    // Raw HTML of a client-rendered app may legitimately lack an H1
    match count_h1(html) {
        0 => findings.warn(format!(
            "{LIVE_PREFIX} No H1 in HTML (SPA may need JS to render; ensure crawlers or prerender see H1)"
        )),
        1 => {}
        n => findings.warn(format!("{LIVE_PREFIX} Multiple H1s ({n}). Prefer one H1 per page.")),
    }

    findings
}

#[cfg(test)]
#[path = "live_tests.rs"]
mod tests;
