// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static shell assets, compiled into the binary.
//!
//! These are the entries the offline cache precaches on install.

use crate::AppState;
use axum::{http::header, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const OFFLINE_HTML: &str = include_str!("../../static/offline.html");
const MANIFEST_JSON: &str = include_str!("../../static/manifest.json");
const ICON_SVG: &str = include_str!("../../static/icon.svg");
const APP_JS: &str = include_str!("../../static/app.js");

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/offline.html", get(offline))
        .route("/manifest.json", get(manifest))
        .route("/icon.svg", get(icon))
        .route("/app.js", get(app_js))
}

fn asset(content_type: &'static str, body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, content_type)], body)
}

async fn index() -> impl IntoResponse {
    asset("text/html; charset=utf-8", INDEX_HTML)
}

async fn offline() -> impl IntoResponse {
    asset("text/html; charset=utf-8", OFFLINE_HTML)
}

async fn manifest() -> impl IntoResponse {
    asset("application/manifest+json", MANIFEST_JSON)
}

async fn icon() -> impl IntoResponse {
    asset("image/svg+xml", ICON_SVG)
}

async fn app_js() -> impl IntoResponse {
    asset("text/javascript; charset=utf-8", APP_JS)
}
