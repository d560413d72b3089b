//! The visited table: every URL a crawl has seen, keyed by normalized form
//!
//! Keys enter the table at most once and are never removed; only the status
//! and retry count of an existing record mutate. Insertion order is kept so
//! the crawl result can be reported in discovery order.

use crate::state::FetchStatus;
use std::collections::HashMap;

/// Record kept for each URL known to a crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlRecord {
    pub status: FetchStatus,

    /// Number of retries spent on this URL so far
    pub retry_count: u32,
}

/// Insertion-ordered map from URL to its fetch record, scoped to one crawl
#[derive(Debug, Default)]
pub struct VisitedTable {
    records: HashMap<String, UrlRecord>,
    order: Vec<String>,
}

impl VisitedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a URL with a fresh `NotAsked` record.
    ///
    /// Returns false without touching the table if the key is already
    /// present; existing records are never replaced.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.records.contains_key(url) {
            return false;
        }
        self.records.insert(url.to_string(), UrlRecord::default());
        self.order.push(url.to_string());
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.records.contains_key(url)
    }

    pub fn get(&self, url: &str) -> Option<&UrlRecord> {
        self.records.get(url)
    }

    /// Retries spent on a URL so far; zero for unknown URLs
    pub fn retry_count(&self, url: &str) -> u32 {
        self.records.get(url).map(|r| r.retry_count).unwrap_or(0)
    }

    /// Marks a URL as successfully fetched. The retry count is untouched.
    pub fn mark_ok(&mut self, url: &str) {
        if let Some(record) = self.records.get_mut(url) {
            record.status = FetchStatus::Ok;
        }
    }

    /// Records a server error against a URL, spending one retry
    pub fn record_server_error(&mut self, url: &str) {
        if let Some(record) = self.records.get_mut(url) {
            record.status = FetchStatus::ServerError;
            record.retry_count += 1;
        }
    }

    /// URLs whose final status is `Ok`, in insertion order
    pub fn ok_urls(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|url| {
                self.records
                    .get(url.as_str())
                    .map(|r| r.status.is_success())
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut table = VisitedTable::new();
        assert!(table.insert("http://a.com/"));
        table.mark_ok("http://a.com/");

        // A second insert must not reset the existing record.
        assert!(!table.insert("http://a.com/"));
        assert_eq!(table.get("http://a.com/").unwrap().status, FetchStatus::Ok);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_mark_ok_leaves_retry_count() {
        let mut table = VisitedTable::new();
        table.insert("http://a.com/");
        table.record_server_error("http://a.com/");
        table.mark_ok("http://a.com/");

        let record = table.get("http://a.com/").unwrap();
        assert_eq!(record.status, FetchStatus::Ok);
        assert_eq!(record.retry_count, 1);
    }

    #[test]
    fn test_server_error_increments_retries() {
        let mut table = VisitedTable::new();
        table.insert("http://a.com/");
        table.record_server_error("http://a.com/");
        table.record_server_error("http://a.com/");

        let record = table.get("http://a.com/").unwrap();
        assert_eq!(record.status, FetchStatus::ServerError);
        assert_eq!(record.retry_count, 2);
    }

    #[test]
    fn test_retry_count_defaults_to_zero() {
        let table = VisitedTable::new();
        assert_eq!(table.retry_count("http://unknown.com/"), 0);
    }

    #[test]
    fn test_ok_urls_preserve_insertion_order() {
        let mut table = VisitedTable::new();
        table.insert("http://a.com/1");
        table.insert("http://a.com/2");
        table.insert("http://a.com/3");
        table.mark_ok("http://a.com/3");
        table.mark_ok("http://a.com/1");

        assert_eq!(table.ok_urls(), vec!["http://a.com/1", "http://a.com/3"]);
    }

    #[test]
    fn test_ok_urls_exclude_server_error_and_not_asked() {
        let mut table = VisitedTable::new();
        table.insert("http://a.com/ok");
        table.insert("http://a.com/err");
        table.insert("http://a.com/untried");
        table.mark_ok("http://a.com/ok");
        table.record_server_error("http://a.com/err");

        assert_eq!(table.ok_urls(), vec!["http://a.com/ok"]);
    }
}
