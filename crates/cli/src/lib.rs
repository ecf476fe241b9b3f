// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static on-page SEO checker.
//!
//! Audits a website project (root markup, component sources, robots.txt,
//! sitemap.xml) and optionally a live URL, then scores the findings.

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fetch;
pub mod file_reader;
pub mod meta;
pub mod report;
pub mod runner;
pub mod score;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
