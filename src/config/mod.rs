//! Configuration module for Rockpool
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files.
//!
//! # Example
//!
//! ```no_run
//! use rockpool::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will examine up to {} frontier slots", config.crawler.max_frontier_slots);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, DEFAULT_MAX_FRONTIER_SLOTS, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, parse_config};

// Re-export validation
pub use validation::validate_config;
