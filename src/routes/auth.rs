// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login / logout routes.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Session;
use crate::services::SessionStore;
use crate::storage::CookieStore;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// Check the credentials and set the session marker cookie.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Session>)> {
    let store = CookieStore::new(jar, state.config.secure_cookies());
    let mut sessions = SessionStore::new(store, &state.config.credentials);

    let session = sessions.login(&body.email, &body.password)?;
    Ok((sessions.into_inner().into_jar(), Json(session)))
}

/// Remove the session marker. Checklist progress stays.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let store = CookieStore::new(jar, state.config.secure_cookies());
    let mut sessions = SessionStore::new(store, &state.config.credentials);

    sessions.logout();
    (sessions.into_inner().into_jar(), StatusCode::NO_CONTENT)
}
