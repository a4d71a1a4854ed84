//! Response cache storage.
//!
//! Holds decoded JSON bodies keyed by endpoint. Entries never expire; only
//! [`ResponseCache::invalidate`] removes them.

use std::collections::HashMap;
use std::sync::RwLock;

use metrics::counter;
use serde_json::Value;

use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

/// In-memory endpoint → body cache shared by every client built on it.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone of the cached body for `endpoint`, recording a hit or miss.
    pub fn get(&self, endpoint: &str) -> Option<Value> {
        let cached = rw_read(&self.entries, SOURCE, "get").get(endpoint).cloned();
        if cached.is_some() {
            counter!("blogdesk_api_cache_hit_total").increment(1);
        } else {
            counter!("blogdesk_api_cache_miss_total").increment(1);
        }
        cached
    }

    /// Store `value` under `endpoint`, replacing any previous entry.
    pub fn set(&self, endpoint: &str, value: Value) {
        rw_write(&self.entries, SOURCE, "set").insert(endpoint.to_string(), value);
    }

    /// Drop the entry for `endpoint`. Removing a missing key is a no-op.
    pub fn invalidate(&self, endpoint: &str) {
        let removed = rw_write(&self.entries, SOURCE, "invalidate").remove(endpoint);
        if removed.is_some() {
            counter!("blogdesk_api_cache_invalidate_total").increment(1);
        }
    }

    pub fn contains(&self, endpoint: &str) -> bool {
        rw_read(&self.entries, SOURCE, "contains").contains_key(endpoint)
    }

    pub fn len(&self) -> usize {
        rw_read(&self.entries, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
