// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::config::Config;
use crate::score::Status;

use super::{Report, ReportFormatter};

const BANNER_WIDTH: usize = 60;

/// Text format report formatter.
pub struct TextFormatter {
    title: String,
    base_url: String,
    index_path: String,
}

impl TextFormatter {
    pub fn new(config: &Config) -> Self {
        let title = match &config.site_name {
            Some(name) => format!("ON-PAGE SEO CHECK - {name}"),
            None => "ON-PAGE SEO CHECK".to_string(),
        };
        Self {
            title,
            base_url: config.base().to_string(),
            index_path: config.paths.index.display().to_string(),
        }
    }
}

/// An error mentioning both og:image and absolute gets the quick-fix hint.
fn needs_image_hint(errors: &[String]) -> bool {
    let joined = errors.join(" ");
    joined.contains("og:image") && joined.contains("absolute")
}

impl ReportFormatter for TextFormatter {
    fn format_to(&self, w: &mut dyn WriteColor, report: &Report) -> io::Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(w, "{banner}")?;
        w.set_color(&scheme::title())?;
        write!(w, "  {}", self.title)?;
        w.reset()?;
        writeln!(w)?;
        writeln!(w, "{banner}")?;

        writeln!(w)?;
        write!(w, "  Score: ")?;
        let spec = match report.status {
            Status::NeedsImprovement => scheme::error(),
            Status::Good => scheme::warning(),
            Status::Strong => scheme::pass(),
        };
        w.set_color(&spec)?;
        write!(w, "{}/100", report.score)?;
        w.reset()?;
        writeln!(w)?;
        writeln!(w, "  Status: {}", report.status.label())?;

        if !report.errors.is_empty() {
            writeln!(w)?;
            w.set_color(&scheme::error())?;
            write!(w, "  ERRORS (fix these first):")?;
            w.reset()?;
            writeln!(w)?;
            for error in &report.errors {
                writeln!(w, "    \u{2022} {error}")?;
            }
        }

        if !report.warnings.is_empty() {
            writeln!(w)?;
            w.set_color(&scheme::warning())?;
            write!(w, "  WARNINGS:")?;
            w.reset()?;
            writeln!(w)?;
            for warning in &report.warnings {
                writeln!(w, "    \u{2022} {warning}")?;
            }
        }

        if report.errors.is_empty() && report.warnings.is_empty() {
            writeln!(w)?;
            writeln!(w, "  No issues found. Keep meta and content up to date.")?;
        }

        writeln!(w)?;
        writeln!(w, "{banner}")?;

        if needs_image_hint(&report.errors) {
            writeln!(w)?;
            w.set_color(&scheme::hint())?;
            writeln!(
                w,
                "  QUICK FIX: In {} set og:image and twitter:image to full URL:",
                self.index_path
            )?;
            writeln!(w, "    content=\"{}/logo.png\"", self.base_url)?;
            w.reset()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
