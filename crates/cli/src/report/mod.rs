// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Final report.
//!
//! Merged findings plus score, rendered as text or JSON.

mod json;
mod text;

use std::io;

use termcolor::{Buffer, WriteColor};

use crate::check::Findings;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::score::{Status, score};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub score: u8,
    pub status: Status,
    /// Score reached the configured pass threshold.
    pub passed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    pub fn new(findings: Findings, pass_score: u8) -> Self {
        let score = score(findings.errors.len(), findings.warnings.len());
        Self {
            score,
            status: Status::from_score(score),
            passed: score >= pass_score,
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }

    /// Process exit code: 0 when passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed { 0 } else { 1 }
    }
}

/// Trait for rendering a report.
pub trait ReportFormatter {
    /// Write the report to a (possibly colored) writer.
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report) -> io::Result<()>;

    /// Render the report to an uncolored string.
    fn format(&self, report: &Report) -> io::Result<String> {
        let mut buffer = Buffer::no_color();
        self.format_to(&mut buffer, report)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }
}

/// Build the formatter for an output format.
pub fn formatter(format: OutputFormat, config: &Config) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(config)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
