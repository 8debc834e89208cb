//! In-memory key-value store with wall-clock expiry.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use super::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Process-local store. Expired entries read as absent.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expiry instant of a live entry, for inspecting TTLs in tests.
    pub fn expires_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries
            .get(key)
            .filter(|e| e.is_live(Utc::now()))
            .and_then(|e| e.expires_at)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .filter(|e| e.is_live(Utc::now()))
            .map(|e| e.value.clone())
    }

    fn set(&mut self, key: &str, value: String, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| Utc::now() + ttl);
        self.entries
            .insert(key.to_string(), Entry { value, expires_at });
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
