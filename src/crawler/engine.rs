//! Crawl engine - the frontier and visited-table state machine
//!
//! This module drives the fetch -> classify -> extract -> enqueue cycle:
//! - The frontier is an ordered sequence of URLs scanned by index, FIFO
//! - The visited table records a status and retry count per URL
//! - A URL answering >= 500 is re-appended to the frontier tail until its
//!   retry budget is spent
//! - Discovered links are enqueued only if unseen and on the seed's origin
//!
//! Both structures live for exactly one crawl; nothing is shared across
//! invocations.

use crate::config::CrawlerConfig;
use crate::crawler::extract::extract_links;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::state::VisitedTable;
use crate::url::same_origin;
use crate::Result;
use reqwest::Client;
use url::Url;

/// Additional attempts granted to a URL that keeps answering >= 500
pub const RETRY_LIMIT: u32 = 2;

/// Single-crawl engine owning the frontier and visited table
pub struct Engine {
    client: Client,
    config: CrawlerConfig,
}

impl Engine {
    /// Creates an engine with a freshly built HTTP client
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self { client, config })
    }

    /// Crawls outward from `seed` and returns every URL that answered
    /// HTTP 200, in discovery order
    ///
    /// The seed enters the frontier unconditionally; parse validity is only
    /// checked per frontier slot before fetching, so an unparseable seed
    /// yields an empty result rather than an error. Transport-level fetch
    /// failures are not caught here; they abort the crawl.
    pub async fn crawl(&self, seed: &str) -> Result<Vec<String>> {
        let mut frontier: Vec<String> = Vec::new();
        let mut visited = VisitedTable::new();

        frontier.push(seed.to_string());
        visited.insert(seed);

        let slot_limit = self.config.max_frontier_slots;
        let mut slot = 0;

        // The frontier can grow while the loop runs, from retries and new
        // discoveries alike. The bound is on slots examined, compared
        // against the live length every iteration.
        while slot < frontier.len().min(slot_limit) {
            let current = frontier[slot].clone();
            slot += 1;

            let base = match Url::parse(&current) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::debug!("Skipping unparseable frontier URL {}: {}", current, e);
                    continue;
                }
            };

            let page = fetch_url(&self.client, &current).await?;
            tracing::debug!("Fetched {} -> HTTP {}", current, page.status);

            if page.status == 200 {
                visited.mark_ok(&current);
            } else if page.status >= 500 && visited.retry_count(&current) < RETRY_LIMIT {
                // Send the URL back to the tail of the frontier until its
                // retry budget runs out.
                visited.record_server_error(&current);
                frontier.push(current.clone());
                tracing::info!(
                    "Server error from {} (retry {} of {})",
                    current,
                    visited.retry_count(&current),
                    RETRY_LIMIT
                );
            }

            // Links are followed whatever the classification; error pages
            // carry anchors too.
            for link in extract_links(&page.body, &base) {
                if visited.contains(&link) {
                    continue;
                }
                if !same_origin(&link, seed) {
                    tracing::debug!("Skipping cross-origin link {}", link);
                    continue;
                }
                visited.insert(&link);
                frontier.push(link);
            }
        }

        tracing::debug!(
            "Crawl finished: {} slots examined, {} URLs known",
            slot,
            visited.len()
        );

        Ok(visited.ok_urls())
    }
}
