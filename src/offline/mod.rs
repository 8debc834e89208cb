// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Offline cache controller.
//!
//! Models the shell's offline lifecycle: precache on install, drop stale
//! generations on activate, and answer fetches cache-first or network-first
//! depending on what is being requested.
//!
//! [`controller::CacheController`] is a library component: the HTTP binary
//! only serves the shell assets and reports the cache name. A host that owns
//! a fetch path embeds the controller with its own [`cache::CacheStorage`]
//! and [`network::Network`].

pub mod cache;
pub mod controller;
pub mod network;

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};

pub use cache::{CacheStorage, MemoryCacheStorage};
pub use controller::{CacheController, CacheError, FetchOutcome};
pub use network::{HttpNetwork, Network, NetworkError};

/// Prefix shared by every cache generation name.
pub const CACHE_PREFIX: &str = "umroh-itinerary";

/// Page served to document requests when the network is down.
pub const OFFLINE_PAGE: &str = "/offline.html";

/// The only background-sync tag the controller reacts to.
pub const SYNC_TAG: &str = "background-sync";

pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// Everything precached on install.
pub const PRECACHE_MANIFEST: &[&str] = &[
    "/",
    "/index.html",
    OFFLINE_PAGE,
    "/manifest.json",
    "/icon.svg",
    FONT_STYLESHEET,
];

/// Cache generation name for a version tag, e.g. `umroh-itinerary-v1`.
pub fn cache_name(version: &str) -> String {
    format!("{CACHE_PREFIX}-{version}")
}

/// What kind of resource a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Document,
    Style,
    Script,
    Font,
    Image,
    Manifest,
    Other,
}

impl Destination {
    /// Parse a `Sec-Fetch-Dest` style value. Unknown values map to `Other`.
    pub fn from_fetch_dest(value: &str) -> Self {
        match value {
            "document" => Destination::Document,
            "style" => Destination::Style,
            "script" => Destination::Script,
            "font" => Destination::Font,
            "image" => Destination::Image,
            "manifest" => Destination::Manifest,
            _ => Destination::Other,
        }
    }

    /// Documents and static assets are served cache-first.
    pub fn is_cache_first(self) -> bool {
        matches!(
            self,
            Destination::Document | Destination::Style | Destination::Script | Destination::Font
        )
    }
}

/// A request seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
    pub destination: Destination,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>, destination: Destination) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            destination,
        }
    }
}

/// A response as stored in (or produced for) the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CachedResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// 2xx, the only responses worth caching.
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }

    /// Synthetic 503 for uncached resources while offline.
    pub fn offline_unavailable() -> Self {
        let mut response = Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Offline content not available",
        );
        response.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_name() {
        assert_eq!(cache_name("v1"), "umroh-itinerary-v1");
    }

    #[test]
    fn test_destination_strategy() {
        for dest in ["document", "style", "script", "font"] {
            assert!(Destination::from_fetch_dest(dest).is_cache_first(), "{dest}");
        }
        for dest in ["image", "manifest", "empty", ""] {
            assert!(!Destination::from_fetch_dest(dest).is_cache_first(), "{dest}");
        }
    }

    #[test]
    fn test_offline_unavailable() {
        let response = CachedResponse::offline_unavailable();
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body, Bytes::from_static(b"Offline content not available"));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_manifest_contains_offline_page() {
        assert!(PRECACHE_MANIFEST.contains(&OFFLINE_PAGE));
        assert_eq!(PRECACHE_MANIFEST.len(), 6);
    }
}
