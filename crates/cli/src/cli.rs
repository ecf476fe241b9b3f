// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;

/// A static on-page SEO checker for website projects
#[derive(Debug, Parser)]
#[command(name = "seocheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root to check
    #[arg(value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// Also check this live URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Only check --url, skip project files
    #[arg(long)]
    pub no_project: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SEOCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
