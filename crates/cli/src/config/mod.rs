// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! The configuration is read once per run from `seocheck.toml` and passed by
//! reference into every check. Every key is optional.

mod checks;
pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub use checks::{DescriptionConfig, FetchConfig, HeadingsConfig, ImagesConfig, TitleConfig};

/// Name of the config file looked up by discovery.
pub const CONFIG_FILE: &str = "seocheck.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL shown in advice (e.g. "https://example.com").
    #[serde(default = "Config::default_base_url")]
    pub base_url: String,

    /// Site name appended to the report banner.
    #[serde(default)]
    pub site_name: Option<String>,

    /// Minimum score for exit code 0.
    #[serde(default = "Config::default_pass_score")]
    pub pass_score: u8,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub title: TitleConfig,

    #[serde(default)]
    pub description: DescriptionConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub headings: HeadingsConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            site_name: None,
            pass_score: Self::default_pass_score(),
            paths: PathsConfig::default(),
            title: TitleConfig::default(),
            description: DescriptionConfig::default(),
            images: ImagesConfig::default(),
            headings: HeadingsConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    fn default_base_url() -> String {
        defaults::BASE_URL.to_string()
    }

    fn default_pass_score() -> u8 {
        defaults::PASS_SCORE
    }

    /// Base URL without a trailing slash, for building example URLs.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Locations of the project inputs, relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "PathsConfig::default_index")]
    pub index: PathBuf,

    #[serde(default = "PathsConfig::default_source")]
    pub source: PathBuf,

    #[serde(default = "PathsConfig::default_robots")]
    pub robots: PathBuf,

    #[serde(default = "PathsConfig::default_sitemap")]
    pub sitemap: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            index: Self::default_index(),
            source: Self::default_source(),
            robots: Self::default_robots(),
            sitemap: Self::default_sitemap(),
        }
    }
}

impl PathsConfig {
    fn default_index() -> PathBuf {
        PathBuf::from(defaults::paths::INDEX)
    }

    fn default_source() -> PathBuf {
        PathBuf::from(defaults::paths::SOURCE)
    }

    fn default_robots() -> PathBuf {
        PathBuf::from(defaults::paths::ROBOTS)
    }

    fn default_sitemap() -> PathBuf {
        PathBuf::from(defaults::paths::SITEMAP)
    }
}

/// Parse configuration from TOML text.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| Error::Config { path: path.to_path_buf(), source })
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
