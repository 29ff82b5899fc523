//! Page fetcher boundary
//!
//! All transport-level failures stay behind this boundary: a failed
//! request, a non-success status, and a lower-level connection error all
//! become `None` plus a logged diagnostic. The catalog walker only ever
//! sees "content" or "no content".

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Boundary for retrieving raw page content
///
/// Implementations must not raise on transport failure; they convert it to
/// absence and log the diagnostic themselves.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the content of `url`, or `None` on any transport failure
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Builds the HTTP client used for catalog requests
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed fetcher for the catalog site
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} returned status {}", url, status);
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to read body from {}: {}", url, e);
                None
            }
        }
    }
}
