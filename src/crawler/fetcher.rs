//! HTTP fetcher
//!
//! One GET at a time, awaited to completion before the next is issued.
//! There is no retry and no redirect policy override: a network failure or
//! a non-success status aborts the crawl.

use crate::{HarvestError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for the whole crawl
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// # Returns
///
/// * `Ok(String)` - Response body for a 2xx status
/// * `Err(HarvestError)` - Network failure or non-success status, carrying
///   the URL for diagnostics
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })
}
