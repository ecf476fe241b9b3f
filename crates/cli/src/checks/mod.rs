// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check implementations.

pub mod headings;
pub mod images;
pub mod index;
pub mod live;
pub mod robots;
pub mod sitemap;

use std::sync::Arc;

use crate::check::{Check, Findings};
use crate::config::{DescriptionConfig, TitleConfig};

/// The five checks that read the project tree, in run and report order.
pub fn project_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(index::IndexCheck),
        Arc::new(images::ImagesCheck),
        Arc::new(headings::HeadingsCheck),
        Arc::new(robots::RobotsCheck),
        Arc::new(sitemap::SitemapCheck),
    ]
}

/// Title length rules for the project's root markup file.
///
/// Lengths in `[min, max]` pass silently; every other length gets exactly one
/// warning.
pub(crate) fn check_title_length(title: &str, cfg: &TitleConfig, findings: &mut Findings) {
    let len = title.chars().count();
    if len < cfg.short {
        findings.warn(format!("Title too short ({len} chars). Aim {}-{}.", cfg.min, cfg.max));
    } else if len > cfg.max {
        findings.warn(format!("Title too long ({len} chars). Keep under {}.", cfg.max));
    } else if len < cfg.min {
        findings.warn(format!("Title a bit short ({len} chars). Optimal {}-{}.", cfg.min, cfg.max));
    }
}

/// Meta description length rules for the project's root markup file.
pub(crate) fn check_description_length(
    description: &str,
    cfg: &DescriptionConfig,
    findings: &mut Findings,
) {
    let len = description.chars().count();
    if len < cfg.short {
        findings.warn(format!(
            "Meta description too short ({len} chars). Aim {}-{}.",
            cfg.min, cfg.max
        ));
    } else if len > cfg.long {
        findings.warn(format!(
            "Meta description too long ({len} chars). Keep {}-{}.",
            cfg.min, cfg.max
        ));
    } else if len < cfg.min || len > cfg.max {
        findings.warn(format!("Meta description length {len}. Optimal {}-{}.", cfg.min, cfg.max));
    }
}

/// Social image URLs checked by both the project and live checks.
pub(crate) const SOCIAL_IMAGES: &[(&str, &str)] =
    &[("og_image", "og:image"), ("twitter_image", "twitter:image")];

/// Truncate a value for display in a finding.
pub(crate) fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
