//! URL handling module for Rockpool
//!
//! This module provides the normalization used for visited-table keys and
//! the origin comparison that scopes a crawl to its seed.

mod normalize;
mod origin;

pub use normalize::normalize_url;
pub use origin::same_origin;
