// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Named cache generations.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::CachedResponse;

/// Storage of named cache generations, each mapping URL to response.
pub trait CacheStorage {
    /// Generation names, oldest first.
    fn keys(&self) -> impl Future<Output = Vec<String>> + Send;

    /// Store one entry, creating the generation if needed.
    fn put(
        &self,
        cache: &str,
        url: &str,
        response: CachedResponse,
    ) -> impl Future<Output = ()> + Send;

    /// Store a batch of entries in one step.
    fn put_all(
        &self,
        cache: &str,
        entries: Vec<(String, CachedResponse)>,
    ) -> impl Future<Output = ()> + Send;

    fn match_in(
        &self,
        cache: &str,
        url: &str,
    ) -> impl Future<Output = Option<CachedResponse>> + Send;

    /// First match across all generations, oldest first.
    fn match_any(&self, url: &str) -> impl Future<Output = Option<CachedResponse>> + Send;

    /// Drop a whole generation. Returns whether it existed.
    fn delete(&self, cache: &str) -> impl Future<Output = bool> + Send;
}

#[derive(Debug, Default)]
struct Generation {
    created: u64,
    entries: HashMap<String, CachedResponse>,
}

/// In-memory cache storage, safe to share across tasks.
#[derive(Debug, Default)]
pub struct MemoryCacheStorage {
    generations: DashMap<String, Generation>,
    next_seq: AtomicU64,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in a generation (0 if it does not exist).
    pub fn len(&self, cache: &str) -> usize {
        self.generations
            .get(cache)
            .map(|g| g.entries.len())
            .unwrap_or(0)
    }

    fn with_generation<R>(&self, cache: &str, f: impl FnOnce(&mut Generation) -> R) -> R {
        let mut generation = self
            .generations
            .entry(cache.to_string())
            .or_insert_with(|| Generation {
                created: self.next_seq.fetch_add(1, Ordering::Relaxed),
                entries: HashMap::new(),
            });
        f(&mut *generation)
    }

    fn ordered_names(&self) -> Vec<String> {
        let mut names: Vec<(u64, String)> = self
            .generations
            .iter()
            .map(|g| (g.created, g.key().clone()))
            .collect();
        names.sort();
        names.into_iter().map(|(_, name)| name).collect()
    }
}

impl CacheStorage for MemoryCacheStorage {
    async fn keys(&self) -> Vec<String> {
        self.ordered_names()
    }

    async fn put(&self, cache: &str, url: &str, response: CachedResponse) {
        self.with_generation(cache, |g| {
            g.entries.insert(url.to_string(), response);
        });
    }

    async fn put_all(&self, cache: &str, entries: Vec<(String, CachedResponse)>) {
        self.with_generation(cache, |g| g.entries.extend(entries));
    }

    async fn match_in(&self, cache: &str, url: &str) -> Option<CachedResponse> {
        self.generations
            .get(cache)
            .and_then(|g| g.entries.get(url).cloned())
    }

    async fn match_any(&self, url: &str) -> Option<CachedResponse> {
        self.ordered_names().into_iter().find_map(|name| {
            self.generations
                .get(&name)
                .and_then(|g| g.entries.get(url).cloned())
        })
    }

    async fn delete(&self, cache: &str) -> bool {
        self.generations.remove(cache).is_some()
    }
}
