// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::temp_file_with_content;

fn parse_str(content: &str) -> Result<Config> {
    parse(content, Path::new("seocheck.toml"))
}

#[test]
fn empty_config_uses_defaults() {
    let config = parse_str("").unwrap();
    assert_eq!(config.base_url, "https://example.com");
    assert_eq!(config.pass_score, 70);
    assert_eq!(config.title.min, 50);
    assert_eq!(config.title.max, 60);
    assert_eq!(config.title.short, 30);
    assert_eq!(config.description.short, 120);
    assert_eq!(config.description.long, 165);
    assert_eq!(config.images.min_alt, 10);
    assert_eq!(config.headings.include, vec!["**/*.tsx".to_string()]);
    assert_eq!(config.fetch.timeout_secs, 15);
    assert!(config.fetch.user_agent.starts_with("seocheck/"));
    assert_eq!(config.paths.index, PathBuf::from("index.html"));
    assert_eq!(config.paths.sitemap, PathBuf::from("public/sitemap.xml"));
}

#[test]
fn parses_overrides() {
    let config = parse_str(
        r#"
base_url = "http://em-taxi.com/"
site_name = "EM Taxi"
pass_score = 80

[title]
max = 65

[paths]
index = "public/index.html"

[images]
include = ["**/*.vue"]
"#,
    )
    .unwrap();
    assert_eq!(config.base(), "http://em-taxi.com");
    assert_eq!(config.site_name.as_deref(), Some("EM Taxi"));
    assert_eq!(config.pass_score, 80);
    assert_eq!(config.title.max, 65);
    assert_eq!(config.title.min, 50);
    assert_eq!(config.paths.index, PathBuf::from("public/index.html"));
    assert_eq!(config.paths.source, PathBuf::from("src"));
    assert_eq!(config.images.include, vec!["**/*.vue".to_string()]);
    assert_eq!(config.images.min_alt, 10);
}

#[test]
fn rejects_unknown_keys() {
    let err = parse_str("unknown = true\n").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn rejects_unknown_nested_keys() {
    let err = parse_str("[title]\nmaximum = 70\n").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn load_reads_file() {
    let file = temp_file_with_content("site_name = \"Demo\"\n");
    let config = load(file.path()).unwrap();
    assert_eq!(config.site_name.as_deref(), Some("Demo"));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load(Path::new("/nonexistent/seocheck.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
