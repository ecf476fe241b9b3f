// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SEO meta extraction from raw HTML.
//!
//! Pattern based, not a DOM parse. Each lookup takes the first match in the
//! document. Missing or malformed tags leave the field empty; judging the
//! values is left to the checks.

use std::sync::LazyLock;

use regex::Regex;

/// `<meta name="..." content="...">` fields.
const NAME_FIELDS: &[&str] = &["description", "keywords", "robots", "author"];

/// `<meta property="..." content="...">` fields.
const PROPERTY_FIELDS: &[&str] = &[
    "og:title",
    "og:description",
    "og:image",
    "og:url",
    "twitter:image",
    "twitter:card",
];

#[allow(clippy::expect_used)]
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>([^<]+)</title>").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static CANONICAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link\s+rel=["']?canonical["']?\s+href=["']([^"']+)["']"#)
        .expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static NAME_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NAME_FIELDS
        .iter()
        .map(|name| meta_regex("name", name).expect("valid regex pattern"))
        .collect()
});

#[allow(clippy::expect_used)]
static PROPERTY_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PROPERTY_FIELDS
        .iter()
        .map(|prop| meta_regex("property", prop).expect("valid regex pattern"))
        .collect()
});

/// Build the pattern for a `<meta {attr}="{key}" content="...">` tag.
///
/// Attribute order is fixed (key attribute first). Quotes around the key are
/// optional; the content value must be quoted.
fn meta_regex(attr: &str, key: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"(?i)<meta\s+{attr}=["']?{}["']?\s+content=["']([^"']+)["']"#,
        regex::escape(key)
    ))
}

/// SEO-relevant fields extracted from one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub robots: Option<String>,
    pub author: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_url: Option<String>,
    pub twitter_image: Option<String>,
    pub twitter_card: Option<String>,
    pub canonical: Option<String>,
}

impl MetaRecord {
    /// Extract meta fields from HTML.
    pub fn extract(html: &str) -> Self {
        let mut record = MetaRecord {
            title: first_capture(&TITLE_REGEX, html),
            canonical: first_capture(&CANONICAL_REGEX, html),
            ..Default::default()
        };

        for (name, re) in NAME_FIELDS.iter().zip(NAME_REGEXES.iter()) {
            if let Some(slot) = record.field_mut(name) {
                *slot = first_capture(re, html);
            }
        }
        for (prop, re) in PROPERTY_FIELDS.iter().zip(PROPERTY_REGEXES.iter()) {
            if let Some(slot) = record.field_mut(&prop.replace(':', "_")) {
                *slot = first_capture(re, html);
            }
        }
        record
    }

    /// Look up a field by its key (e.g. "og_image").
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "title" => &self.title,
            "description" => &self.description,
            "keywords" => &self.keywords,
            "robots" => &self.robots,
            "author" => &self.author,
            "og_title" => &self.og_title,
            "og_description" => &self.og_description,
            "og_image" => &self.og_image,
            "og_url" => &self.og_url,
            "twitter_image" => &self.twitter_image,
            "twitter_card" => &self.twitter_card,
            "canonical" => &self.canonical,
            _ => return None,
        };
        value.as_deref()
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        Some(match key {
            "description" => &mut self.description,
            "keywords" => &mut self.keywords,
            "robots" => &mut self.robots,
            "author" => &mut self.author,
            "og_title" => &mut self.og_title,
            "og_description" => &mut self.og_description,
            "og_image" => &mut self.og_image,
            "og_url" => &mut self.og_url,
            "twitter_image" => &mut self.twitter_image,
            "twitter_card" => &mut self.twitter_card,
            _ => return None,
        })
    }
}

/// First capture group of the first match, trimmed. Blank values count as absent.
fn first_capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Count `<h1>` opening tags (`<h1>` or `<h1 ...`), case-insensitive.
pub fn count_h1(html: &str) -> usize {
    #[allow(clippy::expect_used)]
    static H1_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)<h1(?:\s|>)").expect("valid regex pattern"));
    H1_REGEX.find_iter(html).count()
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
