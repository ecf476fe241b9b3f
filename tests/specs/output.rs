//! Behavioral specs for report output formats.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > JSON output carries score, status and findings
#[test]
fn json_output_is_parseable() {
    let output = seocheck_cmd()
        .arg(fixture("broken-site"))
        .args(["--output", "json"])
        .output()
        .expect("command should run");

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 5);
    assert_eq!(value["status"], "needs_improvement");
    assert_eq!(value["passed"], false);
    assert_eq!(value["errors"].as_array().unwrap().len(), 6);
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
}

/// > Errors are listed before warnings in text output
#[test]
fn text_output_orders_sections() {
    let output = seocheck_cmd().arg(fixture("broken-site")).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let errors = stdout.find("ERRORS (fix these first):").unwrap();
    let warnings = stdout.find("WARNINGS:").unwrap();
    let hint = stdout.find("QUICK FIX").unwrap();
    assert!(errors < warnings && warnings < hint);
    assert!(!stdout.contains("\u{1b}["), "--no-color output must not contain escapes");
}

/// > --verbose logs check progress to stderr only
#[test]
fn verbose_logs_to_stderr() {
    seocheck_cmd()
        .arg(fixture("good-site"))
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicates::str::contains("running index check"))
        .stdout(predicates::str::contains("running").not());
}
