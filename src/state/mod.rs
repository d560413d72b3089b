//! Per-crawl state tracking
//!
//! This module defines the fetch status recorded for each URL and the
//! visited table that owns those records for the lifetime of one crawl.

mod fetch_status;
mod visited;

pub use fetch_status::FetchStatus;
pub use visited::{UrlRecord, VisitedTable};
