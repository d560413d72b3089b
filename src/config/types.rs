use serde::Deserialize;

/// Default bound on the number of frontier slots examined per crawl
pub const DEFAULT_MAX_FRONTIER_SLOTS: usize = 25;

/// Default User-Agent header presented on outbound requests
pub const DEFAULT_USER_AGENT: &str = "rockpool/1.0";

/// Main configuration structure for Rockpool
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of frontier slots examined in a single crawl.
    ///
    /// This bounds slots inspected, not frontier length; a retry re-append
    /// spends one more slot against the same bound.
    #[serde(rename = "max-frontier-slots")]
    pub max_frontier_slots: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_frontier_slots: DEFAULT_MAX_FRONTIER_SLOTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
