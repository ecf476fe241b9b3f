// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check-specific configuration structures.

use serde::Deserialize;

use super::defaults;

/// `<title>` length thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleConfig {
    /// Start of the optimal range.
    #[serde(default = "TitleConfig::default_min")]
    pub min: usize,

    /// End of the optimal range.
    #[serde(default = "TitleConfig::default_max")]
    pub max: usize,

    /// Titles shorter than this are "too short".
    #[serde(default = "TitleConfig::default_short")]
    pub short: usize,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            min: Self::default_min(),
            max: Self::default_max(),
            short: Self::default_short(),
        }
    }
}

impl TitleConfig {
    fn default_min() -> usize {
        defaults::title::MIN
    }

    fn default_max() -> usize {
        defaults::title::MAX
    }

    fn default_short() -> usize {
        defaults::title::SHORT
    }
}

/// Meta description length thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptionConfig {
    #[serde(default = "DescriptionConfig::default_min")]
    pub min: usize,

    #[serde(default = "DescriptionConfig::default_max")]
    pub max: usize,

    #[serde(default = "DescriptionConfig::default_short")]
    pub short: usize,

    #[serde(default = "DescriptionConfig::default_long")]
    pub long: usize,
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            min: Self::default_min(),
            max: Self::default_max(),
            short: Self::default_short(),
            long: Self::default_long(),
        }
    }
}

impl DescriptionConfig {
    fn default_min() -> usize {
        defaults::description::MIN
    }

    fn default_max() -> usize {
        defaults::description::MAX
    }

    fn default_short() -> usize {
        defaults::description::SHORT
    }

    fn default_long() -> usize {
        defaults::description::LONG
    }
}

/// Image alt text check configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImagesConfig {
    /// Glob patterns (relative to the source directory) to scan.
    #[serde(default = "defaults::images::include")]
    pub include: Vec<String>,

    /// Minimum length of a descriptive alt text.
    #[serde(default = "ImagesConfig::default_min_alt")]
    pub min_alt: usize,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            include: defaults::images::include(),
            min_alt: Self::default_min_alt(),
        }
    }
}

impl ImagesConfig {
    fn default_min_alt() -> usize {
        defaults::images::MIN_ALT
    }
}

/// Heading hierarchy check configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadingsConfig {
    /// Glob patterns (relative to the source directory) of page components.
    #[serde(default = "defaults::headings::include")]
    pub include: Vec<String>,
}

impl Default for HeadingsConfig {
    fn default() -> Self {
        Self { include: defaults::headings::include() }
    }
}

/// Live fetch configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    #[serde(default = "FetchConfig::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "defaults::fetch::user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Self::default_timeout_secs(),
            user_agent: defaults::fetch::user_agent(),
        }
    }
}

impl FetchConfig {
    fn default_timeout_secs() -> u64 {
        defaults::fetch::TIMEOUT_SECS
    }
}
