// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Install / activate / fetch / sync lifecycle.

use axum::http::Method;

use super::{
    cache_name, CacheStorage, CachedResponse, Destination, FetchRequest, Network, NetworkError,
    OFFLINE_PAGE, PRECACHE_MANIFEST, SYNC_TAG,
};

/// Install failures. Nothing is committed when install fails.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to precache {url}: {reason}")]
    PrecacheFailed { url: String, reason: String },
}

/// How a fetch was handled.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Not intercepted; the host performs the request itself.
    PassThrough,
    Respond(CachedResponse),
    /// Network failed and no cached answer exists.
    Failed(NetworkError),
}

/// Offline cache controller for one cache generation.
pub struct CacheController<N, C> {
    network: N,
    storage: C,
    cache_name: String,
    manifest: Vec<String>,
}

impl<N: Network, C: CacheStorage> CacheController<N, C> {
    /// Controller for the generation named by `version`, with the default
    /// precache manifest.
    pub fn new(network: N, storage: C, version: &str) -> Self {
        Self {
            network,
            storage,
            cache_name: cache_name(version),
            manifest: PRECACHE_MANIFEST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the precache manifest.
    pub fn with_manifest<I, S>(mut self, manifest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manifest = manifest.into_iter().map(Into::into).collect();
        self
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    pub fn manifest(&self) -> &[String] {
        &self.manifest
    }

    pub fn storage(&self) -> &C {
        &self.storage
    }

    /// Fetch every manifest entry, then commit them all at once.
    ///
    /// Any network failure or non-OK response aborts the install before
    /// anything is written. Returns the number of entries cached.
    pub async fn install(&self) -> Result<usize, CacheError> {
        let mut entries = Vec::with_capacity(self.manifest.len());

        for url in &self.manifest {
            let request = FetchRequest::get(url.clone(), Destination::Other);
            let response =
                self.network
                    .fetch(&request)
                    .await
                    .map_err(|e| CacheError::PrecacheFailed {
                        url: url.clone(),
                        reason: e.to_string(),
                    })?;

            if !response.is_ok() {
                return Err(CacheError::PrecacheFailed {
                    url: url.clone(),
                    reason: format!("status {}", response.status),
                });
            }
            entries.push((url.clone(), response));
        }

        let count = entries.len();
        self.storage.put_all(&self.cache_name, entries).await;
        tracing::info!(cache = %self.cache_name, entries = count, "Precached offline shell");
        Ok(count)
    }

    /// Delete every generation other than the current one.
    pub async fn activate(&self) -> Vec<String> {
        let mut deleted = Vec::new();
        for name in self.storage.keys().await {
            if name != self.cache_name && self.storage.delete(&name).await {
                tracing::info!(cache = %name, "Deleted old cache");
                deleted.push(name);
            }
        }
        deleted
    }

    /// Answer a request.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> FetchOutcome {
        if request.method != Method::GET {
            return FetchOutcome::PassThrough;
        }

        if request.destination.is_cache_first() {
            FetchOutcome::Respond(self.cache_first(request).await)
        } else {
            self.network_first(request).await
        }
    }

    async fn cache_first(&self, request: &FetchRequest) -> CachedResponse {
        if let Some(cached) = self.storage.match_in(&self.cache_name, &request.url).await {
            return cached;
        }

        match self.network.fetch(request).await {
            Ok(response) => {
                if response.is_ok() {
                    self.storage
                        .put(&self.cache_name, &request.url, response.clone())
                        .await;
                }
                response
            }
            Err(e) => {
                tracing::debug!(url = %request.url, error = %e, "Network failed, serving offline fallback");
                if request.destination == Destination::Document {
                    if let Some(page) = self.storage.match_in(&self.cache_name, OFFLINE_PAGE).await
                    {
                        return page;
                    }
                }
                CachedResponse::offline_unavailable()
            }
        }
    }

    async fn network_first(&self, request: &FetchRequest) -> FetchOutcome {
        match self.network.fetch(request).await {
            Ok(response) => FetchOutcome::Respond(response),
            Err(e) => match self.storage.match_any(&request.url).await {
                Some(cached) => FetchOutcome::Respond(cached),
                None => FetchOutcome::Failed(e),
            },
        }
    }

    /// Background-sync hook. Returns whether the tag was handled.
    pub fn sync(&self, tag: &str) -> bool {
        if tag != SYNC_TAG {
            return false;
        }
        tracing::info!("Background sync triggered");
        true
    }
}
