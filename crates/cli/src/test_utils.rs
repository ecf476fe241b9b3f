//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the seocheck crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

use crate::check::{CheckContext, Findings};
use crate::config::Config;

/// Creates an empty temp directory acting as a project root.
pub fn temp_project() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_project();
/// create_tree(tmp.path(), &[
///     ("index.html", "<title>Home</title>"),
///     ("src/App.tsx", "<h1>Welcome</h1>"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Runs a check against `root` with the default configuration.
pub fn run_check(check: &dyn crate::check::Check, root: &Path) -> Findings {
    let config = Config::default();
    let ctx = CheckContext { root, config: &config };
    check.run(&ctx).unwrap()
}

/// Builds an `index.html` document from the given head elements.
pub fn html_page(head: &str, body: &str) -> String {
    format!("<!doctype html>\n<html>\n<head>\n{head}\n</head>\n<body>\n{body}\n</body>\n</html>\n")
}
