//! HTTP fetcher implementation
//!
//! This module builds the HTTP client used by the crawl engine and performs
//! the per-slot GET requests. Non-2xx statuses are not errors here; the
//! engine classifies them. Transport-level failures (DNS, connection, body
//! read) surface as errors to the caller.

use crate::{Result, RockpoolError};
use reqwest::Client;

/// Status code and fully read body of one fetched page
#[derive(Debug)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Builds the HTTP client used for a crawl
///
/// The client carries the configured User-Agent and transparently handles
/// gzip/brotli encodings. No request timeout is set; the engine awaits each
/// response to completion before moving on.
pub fn build_http_client(user_agent: &str) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs a GET on `url` and reads the response body to completion
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| RockpoolError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status().as_u16();

    let body = response
        .text()
        .await
        .map_err(|source| RockpoolError::Http {
            url: url.to_string(),
            source,
        })?;

    Ok(FetchedPage { status, body })
}
