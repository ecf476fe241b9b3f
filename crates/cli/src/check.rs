// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check trait and finding types.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Ordered errors and warnings produced by one or more checks.
///
/// Order reflects the order checks ran in, not severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings holding a single error.
    pub fn single_error(message: impl Into<String>) -> Self {
        let mut findings = Self::new();
        findings.error(message);
        findings
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another set of findings after these.
    pub fn extend(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Context passed to each check.
pub struct CheckContext<'a> {
    /// Project root directory.
    pub root: &'a Path,
    /// Run configuration.
    pub config: &'a Config,
}

impl CheckContext<'_> {
    /// Path relative to the project root, for display.
    pub fn display_path<'p>(&self, path: &'p Path) -> std::path::Display<'p> {
        path.strip_prefix(self.root).unwrap_or(path).display()
    }
}

/// A single SEO check.
pub trait Check: Send + Sync {
    /// Unique identifier for this check (e.g., "robots").
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Run the check.
    ///
    /// Missing inputs and rule violations are findings. `Err` is reserved for
    /// fatal faults such as an unreadable file.
    fn run(&self, ctx: &CheckContext) -> Result<Findings>;
}

/// Findings from one check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub findings: Findings,
}

impl CheckResult {
    pub fn new(name: &'static str, findings: Findings) -> Self {
        Self { name, findings }
    }
}

/// Absolute-URL test used across checks.
///
/// A literal `http` prefix test, so `https://`, `http://` and anything else
/// starting with "http" pass, while root-relative and scheme-relative URLs fail.
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http")
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
