//! Bounded TTL cache for upstream responses
//!
//! Keys combine the endpoint path with the sorted query parameters, so the
//! same request always maps to the same entry regardless of parameter order.

use ahash::AHashMap;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    inserted: Instant,
}

/// Shared response cache, safe for concurrent readers and writers
#[derive(Debug)]
pub struct ResponseCache {
    entries: RwLock<AHashMap<String, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(AHashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    /// Deterministic key for an endpoint and its parameters
    pub fn key(endpoint: &str, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<_> = params.iter().collect();
        sorted.sort();
        let query: Vec<String> = sorted.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        format!("{}:{}", endpoint, query.join("&"))
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        self.get_at(key, Instant::now()).await
    }

    pub async fn insert(&self, key: String, value: Value) {
        self.insert_at(key, value, Instant::now()).await
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn get_at(&self, key: &str, now: Instant) -> Option<Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|e| now.saturating_duration_since(e.inserted) < self.ttl)
            .map(|e| e.value.clone())
    }

    async fn insert_at(&self, key: String, value: Value, now: Instant) {
        let mut entries = self.entries.write().await;

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let ttl = self.ttl;
            entries.retain(|_, e| now.saturating_duration_since(e.inserted) < ttl);

            if entries.len() >= self.max_entries {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.inserted)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                }
            }
        }

        entries.insert(
            key,
            CacheEntry {
                value,
                inserted: now,
            },
        );
    }
}
