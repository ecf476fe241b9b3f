// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::{self, Write};

use chrono::Utc;
use serde_json::json;
use termcolor::WriteColor;

use super::{Report, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, w: &mut dyn WriteColor, report: &Report) -> io::Result<()> {
        let value = json!({
            "checked": Utc::now().to_rfc3339(),
            "score": report.score,
            "status": report.status,
            "passed": report.passed,
            "errors": report.errors,
            "warnings": report.warnings,
        });
        serde_json::to_writer_pretty(&mut *w, &value).map_err(io::Error::from)?;
        writeln!(w)
    }
}
