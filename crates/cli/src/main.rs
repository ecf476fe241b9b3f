// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use seocheck::check::{Check, CheckContext};
use seocheck::checks::{self, live::LiveCheck};
use seocheck::cli::Cli;
use seocheck::color;
use seocheck::config::{self, Config};
use seocheck::discovery;
use seocheck::fetch::HttpFetcher;
use seocheck::report::{self, Report};
use seocheck::runner::{CheckRunner, merge};

/// Exit code for fatal faults, distinct from a failing score.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("seocheck: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("SEOCHECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(&absolute_root(&cli.root)?),
    };
    match path {
        Some(path) => config::load(&path).with_context(|| "failed to load configuration"),
        None => Ok(Config::default()),
    }
}

/// Resolve the project root so discovery can walk its ancestors.
fn absolute_root(root: &Path) -> anyhow::Result<PathBuf> {
    match root.canonicalize() {
        Ok(path) => Ok(path),
        Err(_) => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Ok(cwd.join(root))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config = load_config(cli)?;

    let mut enabled: Vec<Arc<dyn Check>> = Vec::new();
    if !cli.no_project {
        enabled.extend(checks::project_checks());
    }
    if let Some(url) = &cli.url {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        enabled.push(Arc::new(LiveCheck::new(url.clone(), Box::new(fetcher))));
    }
    if enabled.is_empty() {
        tracing::warn!("--no-project without --url: nothing to check");
    }

    let ctx = CheckContext { root: &cli.root, config: &config };
    let results = CheckRunner::new().run(&enabled, &ctx)?;
    let report = Report::new(merge(&results), config.pass_score);

    let mut stdout = StandardStream::stdout(color::resolve(cli.color, cli.no_color));
    report::formatter(cli.output, &config)
        .format_to(&mut stdout, &report)
        .context("failed to write report")?;

    Ok(report.exit_code())
}
