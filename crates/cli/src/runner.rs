// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner.
//!
//! Runs checks one after another in the order given and collects their
//! findings. A check's findings never stop later checks; only a fatal error
//! (e.g. an unreadable file) aborts the run.

use std::sync::Arc;

use crate::check::{Check, CheckContext, CheckResult, Findings};
use crate::error::Result;

/// The check runner executes checks in sequence.
#[derive(Default)]
pub struct CheckRunner;

impl CheckRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run all provided checks and return their results in run order.
    pub fn run(&self, checks: &[Arc<dyn Check>], ctx: &CheckContext) -> Result<Vec<CheckResult>> {
        let mut results = Vec::with_capacity(checks.len());
        for check in checks {
            tracing::debug!("running {} check: {}", check.name(), check.description());
            let findings = check.run(ctx)?;
            tracing::debug!(
                "{}: {} errors, {} warnings",
                check.name(),
                findings.errors.len(),
                findings.warnings.len()
            );
            results.push(CheckResult::new(check.name(), findings));
        }
        Ok(results)
    }
}

/// Merge per-check findings by appending in run order.
pub fn merge(results: &[CheckResult]) -> Findings {
    let mut merged = Findings::new();
    for result in results {
        merged.extend(result.findings.clone());
    }
    merged
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
