// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image alt text check.
//!
//! Scans component sources for `<img ...>` tags:
//! - no `alt=` at all is an error
//! - an empty or very short quoted alt is a warning
//! - an expression-bound alt (`alt={...}`) is not evaluated

use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, CheckContext, Findings};
use crate::file_reader::read_lossy;
use crate::walker::{build_glob_set, collect_files};

/// `<img ...>` tag; the attribute span may cover several lines.
#[allow(clippy::expect_used)]
static IMG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\s([^>]+)>").expect("valid regex pattern"));

/// Quoted alt literal inside an attribute span.
#[allow(clippy::expect_used)]
static ALT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"alt=["']([^"']*)["']"#).expect("valid regex pattern"));

/// Outcome of inspecting one `<img>` tag.
#[derive(Debug, PartialEq, Eq)]
pub enum AltStatus {
    /// No `alt=` attribute.
    Missing,
    /// Quoted alt that is blank.
    Empty,
    /// Quoted alt shorter than the configured minimum.
    TooShort,
    /// Quoted alt of acceptable length.
    Descriptive,
    /// `alt={expr}`: assumed descriptive, not evaluated.
    Dynamic,
}

/// Classify the alt attribute of an `<img>` attribute span.
pub fn classify_alt(attrs: &str, min_alt: usize) -> AltStatus {
    if !attrs.contains("alt=") {
        return AltStatus::Missing;
    }
    let literal = ALT_REGEX.captures(attrs).and_then(|cap| cap.get(1)).map(|m| m.as_str());
    if literal.is_none() && attrs.contains("alt={") {
        return AltStatus::Dynamic;
    }
    // An unquoted, non-expression value is treated like an empty alt
    let alt = literal.unwrap_or("");
    if alt.trim().is_empty() {
        AltStatus::Empty
    } else if alt.chars().count() < min_alt {
        AltStatus::TooShort
    } else {
        AltStatus::Descriptive
    }
}

/// The images check validates alt text on `<img>` tags.
pub struct ImagesCheck;

impl Check for ImagesCheck {
    fn name(&self) -> &'static str {
        "images"
    }

    fn description(&self) -> &'static str {
        "Alt text on <img> tags in component sources"
    }

    fn run(&self, ctx: &CheckContext) -> crate::Result<Findings> {
        let config = &ctx.config.images;
        let include = build_glob_set(&config.include)?;
        let mut findings = Findings::new();

        for path in collect_files(&ctx.root.join(&ctx.config.paths.source), &include) {
            let Some(text) = read_lossy(&path)? else {
                continue;
            };
            let display = ctx.display_path(&path);

            for cap in IMG_REGEX.captures_iter(&text) {
                let attrs = cap.get(1).map_or("", |m| m.as_str());
                match classify_alt(attrs, config.min_alt) {
                    AltStatus::Missing => {
                        findings.error(format!("{display}: <img> without alt attribute"))
                    }
                    AltStatus::Empty => findings.warn(format!("{display}: <img> has empty alt")),
                    AltStatus::TooShort => findings
                        .warn(format!("{display}: alt text very short (aim descriptive)")),
                    AltStatus::Descriptive | AltStatus::Dynamic => {}
                }
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
