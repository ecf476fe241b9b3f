// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Base URL used in advice messages.
pub const BASE_URL: &str = "https://example.com";

/// Minimum score for a passing run (exit code 0).
pub const PASS_SCORE: u8 = 70;

/// Project-relative input locations.
pub mod paths {
    pub const INDEX: &str = "index.html";
    pub const SOURCE: &str = "src";
    pub const ROBOTS: &str = "public/robots.txt";
    pub const SITEMAP: &str = "public/sitemap.xml";
}

/// `<title>` length thresholds, in characters.
pub mod title {
    /// Start of the optimal range (50).
    pub const MIN: usize = 50;

    /// End of the optimal range (60).
    pub const MAX: usize = 60;

    /// Below this the title is "too short" (30).
    pub const SHORT: usize = 30;
}

/// Meta description length thresholds, in characters.
pub mod description {
    /// Start of the optimal range (150).
    pub const MIN: usize = 150;

    /// End of the optimal range (160).
    pub const MAX: usize = 160;

    /// Below this the description is "too short" (120).
    pub const SHORT: usize = 120;

    /// Above this the description is "too long" (165).
    pub const LONG: usize = 165;
}

/// Image alt text defaults.
pub mod images {
    /// Alt text shorter than this is flagged as not descriptive.
    pub const MIN_ALT: usize = 10;

    /// Component source files scanned for `<img>` tags.
    pub fn include() -> Vec<String> {
        vec![
            "**/*.tsx".to_string(),
            "**/*.jsx".to_string(),
            "**/*.ts".to_string(),
            "**/*.js".to_string(),
        ]
    }
}

/// Heading hierarchy defaults.
pub mod headings {
    /// Page component files scanned for `<h1>` tags.
    pub fn include() -> Vec<String> {
        vec!["**/*.tsx".to_string()]
    }
}

/// Live fetch defaults.
pub mod fetch {
    /// Request timeout (15 seconds).
    pub const TIMEOUT_SECS: u64 = 15;

    /// User-Agent header sent with the live request.
    pub fn user_agent() -> String {
        format!("seocheck/{}", env!("CARGO_PKG_VERSION"))
    }
}
