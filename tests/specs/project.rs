//! Behavioral specs for the project file checks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// FIXTURE PROJECTS
// =============================================================================

/// > A project meeting every rule scores 100 and exits 0
#[test]
fn good_site_passes() {
    seocheck_cmd()
        .arg(fixture("good-site"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Score: 100/100"))
        .stdout(predicates::str::contains("Status: Strong"))
        .stdout(predicates::str::contains("No issues found"));
}

/// > Findings from all five checks are merged and scored
#[test]
fn broken_site_fails() {
    seocheck_cmd()
        .arg(fixture("broken-site"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Score: 5/100"))
        .stdout(predicates::str::contains("Status: Needs improvement"))
        .stdout(predicates::str::contains("Missing meta description"))
        .stdout(predicates::str::contains("og:image must be absolute URL"))
        .stdout(predicates::str::contains("Hero.tsx: <img> without alt attribute"))
        .stdout(predicates::str::contains("No H1 found in src"))
        .stdout(predicates::str::contains("public/robots.txt missing"))
        .stdout(predicates::str::contains("public/sitemap.xml missing"))
        .stdout(predicates::str::contains("Missing twitter:image for social sharing"))
        .stdout(predicates::str::contains("QUICK FIX"));
}

/// > --no-project skips every project check
#[test]
fn no_project_skips_project_checks() {
    seocheck_cmd()
        .arg(fixture("broken-site"))
        .arg("--no-project")
        .assert()
        .success()
        .stdout(predicates::str::contains("Score: 100/100"));
}

// =============================================================================
// SINGLE-RULE PROJECTS
// =============================================================================

/// > An empty project reports each missing file once
#[test]
fn empty_project_reports_missing_files() {
    let site = temp_site(&[]);
    seocheck_cmd()
        .arg(site.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("index.html not found"))
        .stdout(predicates::str::contains("public/robots.txt missing"))
        .stdout(predicates::str::contains("public/sitemap.xml missing"))
        .stdout(predicates::str::contains("Score: 55/100"))
        .stdout(predicates::str::contains("No H1").not());
}

/// > Invalid sitemap XML is reported as an error, not a crash
#[test]
fn malformed_sitemap_is_reported() {
    let site = temp_site(&[("public/sitemap.xml", "<urlset><url>")]);
    seocheck_cmd()
        .arg(site.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("sitemap.xml invalid XML:"));
}

/// > Configured paths and base URL are honored
#[test]
fn config_overrides_paths_and_base_url() {
    let site = temp_site(&[
        (
            "seocheck.toml",
            "base_url = \"http://em-taxi.com\"\nsite_name = \"EM Taxi\"\n\n[paths]\nrobots = \"static/robots.txt\"\n",
        ),
        ("static/robots.txt", "User-agent: *\nDisallow: /admin\n"),
    ]);
    seocheck_cmd()
        .arg(site.path())
        .assert()
        .stdout(predicates::str::contains("ON-PAGE SEO CHECK - EM Taxi"))
        .stdout(predicates::str::contains("Sitemap: http://em-taxi.com/sitemap.xml"))
        .stdout(predicates::str::contains("Ensure main content is allowed (Allow: /)"))
        .stdout(predicates::str::contains("robots.txt missing").not());
}

/// > The default root finds seocheck.toml in a parent directory
#[test]
fn config_discovered_from_subdirectory() {
    let site = temp_site(&[
        ("seocheck.toml", "site_name = \"Parent Config\"\n"),
        ("site/index.html", "<title>Home</title>"),
    ]);
    seocheck_cmd()
        .current_dir(site.path().join("site"))
        .assert()
        .stdout(predicates::str::contains("ON-PAGE SEO CHECK - Parent Config"));
}

/// > An explicit relative root also walks up to the git root
#[test]
fn config_discovered_from_relative_root() {
    let site = temp_site(&[
        ("seocheck.toml", "site_name = \"Parent Config\"\n"),
        ("site/index.html", "<title>Home</title>"),
    ]);
    seocheck_cmd()
        .current_dir(site.path())
        .arg("site")
        .assert()
        .stdout(predicates::str::contains("ON-PAGE SEO CHECK - Parent Config"));
}
