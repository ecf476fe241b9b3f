// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live page fetching.
//!
//! A fetch either yields the page body or nothing. Network, protocol, HTTP
//! status and timeout failures are logged and collapsed into `None`.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::FetchConfig;
use crate::error::Result;
use crate::file_reader::decode_lossy;

/// Retrieves the HTML of a URL.
pub trait Fetch: Send + Sync {
    /// Fetch `url`, returning `None` on any failure or an empty body.
    fn fetch(&self, url: &str) -> Option<String>;
}

/// Blocking HTTP fetcher with a fixed timeout and user agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.bytes()?.to_vec())
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        tracing::debug!("fetching {url}");
        match self.get(url) {
            Ok(bytes) if bytes.is_empty() => {
                tracing::warn!("empty response from {url}");
                None
            }
            Ok(bytes) => Some(decode_lossy(bytes)),
            Err(e) => {
                tracing::warn!("failed to fetch {url}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
