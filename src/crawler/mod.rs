//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The frontier and visited-table crawl engine
//! - HTTP fetching
//! - Pattern-based link extraction

mod engine;
mod extract;
mod fetcher;

pub use engine::{Engine, RETRY_LIMIT};
pub use extract::extract_links;
pub use fetcher::{build_http_client, fetch_url, FetchedPage};

use crate::config::CrawlerConfig;
use crate::Result;

/// Runs a complete crawl from `seed` with the given configuration
///
/// This is the main entry point for callers. It builds the HTTP client,
/// drives the engine until the slot bound is hit or the frontier empties,
/// and returns the URLs that answered HTTP 200 in discovery order.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed` - The URL the crawl starts from
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Successfully fetched URLs in discovery order
/// * `Err(RockpoolError)` - The crawl was aborted by a transport failure
pub async fn crawl(config: CrawlerConfig, seed: &str) -> Result<Vec<String>> {
    let engine = Engine::new(config)?;
    engine.crawl(seed).await
}
