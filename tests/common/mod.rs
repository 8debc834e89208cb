// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceExt;
use umroh_itinerary::config::Config;
use umroh_itinerary::routes::create_router;
use umroh_itinerary::AppState;

/// Create a test app with the default configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_config(Config::default())
}

#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { config });
    (create_router(state.clone()), state)
}

/// A response as seen by the test client.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body is UTF-8")
    }

    /// Raw `Set-Cookie` header for `name`, if any.
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{name}=")))
            .map(str::to_string)
    }

    /// Every raw `Set-Cookie` header.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// Whether any `Set-Cookie` writes `key` or one of its `key.N` parts.
    pub fn writes_key(&self, key: &str) -> bool {
        self.set_cookies()
            .iter()
            .any(|v| v.starts_with(&format!("{key}=")) || v.starts_with(&format!("{key}.")))
    }
}

/// Browsers ignore a `Set-Cookie` larger than this.
#[allow(dead_code)]
pub const BROWSER_COOKIE_LIMIT: usize = 4096;

/// Minimal browser: keeps cookies between requests like a real client.
#[allow(dead_code)]
pub struct TestClient {
    app: Router,
    pub cookies: BTreeMap<String, String>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(app: Router) -> Self {
        Self {
            app,
            cookies: BTreeMap::new(),
        }
    }

    /// Client that has already logged in with the default credentials.
    pub async fn logged_in(app: Router) -> Self {
        let mut client = Self::new(app);
        let response = client
            .post_json(
                "/auth/login",
                r#"{"email":"admin@gmail.com","password":"admin"}"#,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        client
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, Body::empty()).await
    }

    pub async fn post(&mut self, uri: &str) -> TestResponse {
        self.send(Method::POST, uri, None, Body::empty()).await
    }

    pub async fn post_json(&mut self, uri: &str, json: &str) -> TestResponse {
        self.send(
            Method::POST,
            uri,
            Some("application/json"),
            Body::from(json.to_string()),
        )
        .await
    }

    pub async fn post_text(&mut self, uri: &str, text: &str) -> TestResponse {
        self.send(
            Method::POST,
            uri,
            Some("text/plain"),
            Body::from(text.to_string()),
        )
        .await
    }

    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        if !self.cookies.is_empty() {
            let cookie_header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(header::COOKIE, cookie_header);
        }

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        self.absorb_cookies(&headers);
        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Whether a stored cookie is `key` or one of its `key.N` parts.
    pub fn has_key(&self, key: &str) -> bool {
        self.cookies
            .keys()
            .any(|name| name == key || name.starts_with(&format!("{key}.")))
    }

    fn absorb_cookies(&mut self, headers: &HeaderMap) {
        for value in headers.get_all(header::SET_COOKIE) {
            let value = value.to_str().unwrap();
            if value.len() > BROWSER_COOKIE_LIMIT {
                continue;
            }
            let (pair, attributes) = value.split_once(';').unwrap_or((value, ""));
            let (name, cookie_value) = pair.split_once('=').unwrap();
            if attributes.contains("Max-Age=0") {
                self.cookies.remove(name.trim());
            } else {
                self.cookies
                    .insert(name.trim().to_string(), cookie_value.to_string());
            }
        }
    }
}
