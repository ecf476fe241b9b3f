// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sitemap.xml check.
//!
//! Parses the sitemap as XML and requires every `<loc>` to be absolute.
//! `<url>` entries are looked up in the sitemaps.org namespace first, then
//! without a namespace.

use roxmltree::{Document, Node, ParsingOptions};

use crate::check::{Check, CheckContext, Findings, is_absolute_url};
use crate::file_reader::read_lossy;

use super::truncate;

/// Standard sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// The sitemap check validates public/sitemap.xml.
pub struct SitemapCheck;

impl Check for SitemapCheck {
    fn name(&self) -> &'static str {
        "sitemap"
    }

    fn description(&self) -> &'static str {
        "sitemap.xml is well-formed with absolute <loc> URLs"
    }

    fn run(&self, ctx: &CheckContext) -> crate::Result<Findings> {
        let relative = &ctx.config.paths.sitemap;
        let Some(text) = read_lossy(&ctx.root.join(relative))? else {
            return Ok(Findings::single_error(format!("{} missing", relative.display())));
        };
        Ok(check_sitemap_xml(&text))
    }
}

/// Apply the sitemap rules to file content.
pub fn check_sitemap_xml(text: &str) -> Findings {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = match Document::parse_with_options(text, options) {
        Ok(doc) => doc,
        Err(e) => return Findings::single_error(format!("sitemap.xml invalid XML: {e}")),
    };

    let mut findings = Findings::new();
    let root = doc.root_element();
    let mut urls: Vec<Node> = find_descendants(root, "url", Some(SITEMAP_NS));
    if urls.is_empty() {
        urls = find_descendants(root, "url", None);
    }
    if urls.is_empty() {
        findings.warn("sitemap.xml has no <url> entries");
        return findings;
    }

    for url in urls {
        let loc = find_child(url, "loc", None).or_else(|| find_child(url, "loc", Some(SITEMAP_NS)));
        let Some(href) = loc.and_then(|n| n.text()).map(str::trim) else {
            continue;
        };
        if !href.is_empty() && !is_absolute_url(href) {
            findings.error(format!("Sitemap <loc> must be absolute: {}", truncate(href, 60)));
        }
    }
    findings
}

fn is_element_named(node: &Node, name: &str, ns: Option<&str>) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == ns
}

/// Matching elements strictly below `node`, in document order.
fn find_descendants<'a, 'i>(node: Node<'a, 'i>, name: &str, ns: Option<&str>) -> Vec<Node<'a, 'i>> {
    node.descendants().skip(1).filter(|n| is_element_named(n, name, ns)).collect()
}

/// First matching direct child of `node`.
fn find_child<'a, 'i>(node: Node<'a, 'i>, name: &str, ns: Option<&str>) -> Option<Node<'a, 'i>> {
    node.children().find(|n| is_element_named(n, name, ns))
}

#[cfg(test)]
#[path = "sitemap_tests.rs"]
mod tests;
