// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized file reading.
//!
//! Markup and source files are decoded leniently: invalid UTF-8 is replaced
//! with U+FFFD rather than rejected. Absence is a normal outcome (the caller
//! turns it into a finding); any other I/O failure is fatal.

use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a file as text, substituting replacement characters for invalid UTF-8.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_lossy(path: &Path) -> Result<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(decode_lossy(bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Io { path: path.to_path_buf(), source }),
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
