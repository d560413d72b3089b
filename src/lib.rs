//! Rockpool: a bounded same-origin web crawler
//!
//! Given a seed URL, Rockpool fetches pages breadth-first within the seed's
//! origin, retries transient server failures a bounded number of times, and
//! reports the set of URLs that answered HTTP 200.

pub mod config;
pub mod crawler;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Rockpool operations
#[derive(Debug, Error)]
pub enum RockpoolError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Rockpool operations
pub type Result<T> = std::result::Result<T, RockpoolError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::crawl;
pub use crate::state::{FetchStatus, UrlRecord, VisitedTable};
pub use crate::url::{normalize_url, same_origin};
