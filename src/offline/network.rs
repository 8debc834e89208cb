// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Network side of the offline cache.

use std::future::Future;

use super::{CachedResponse, FetchRequest};

/// Network failures. A non-2xx response is not a failure.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Network unavailable: {0}")]
    Unavailable(String),
}

/// Something that can fetch a request over the network.
pub trait Network {
    fn fetch(
        &self,
        request: &FetchRequest,
    ) -> impl Future<Output = Result<CachedResponse, NetworkError>> + Send;
}

/// HTTP network client.
///
/// Relative URLs from the precache manifest are resolved against `origin`.
#[derive(Clone)]
pub struct HttpNetwork {
    http: reqwest::Client,
    origin: String,
}

impl HttpNetwork {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for `url`.
    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.origin, url)
        } else {
            format!("{}/{}", self.origin, url)
        }
    }
}

impl Network for HttpNetwork {
    async fn fetch(&self, request: &FetchRequest) -> Result<CachedResponse, NetworkError> {
        let url = self.resolve(&request.url);
        tracing::debug!(method = %request.method, url = %url, "Fetching from network");

        let response = self
            .http
            .request(request.method.clone(), &url)
            .send()
            .await
            .map_err(|e| NetworkError::Unavailable(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Unavailable(e.to_string()))?;

        Ok(CachedResponse {
            status,
            headers,
            body,
        })
    }
}
