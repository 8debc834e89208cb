// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session marker authentication middleware.

use crate::error::AppError;
use crate::services::SessionStore;
use crate::storage::CookieStore;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Middleware that requires a restorable session marker.
///
/// On success the [`crate::models::Session`] is available to handlers as an
/// `Extension`. A corrupt marker is cleared in the 401 response.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let store = CookieStore::new(jar, state.config.secure_cookies());
    let mut sessions = SessionStore::new(store, &state.config.credentials);

    match sessions.restore() {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => {
            let jar = sessions.into_inner().into_jar();
            (jar, AppError::Unauthorized).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Session;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use axum::{middleware, routing::get, Extension, Router};
    use tower::ServiceExt; // for oneshot

    fn app() -> Router {
        let state = Arc::new(AppState {
            config: Config::default(),
        });
        Router::new()
            .route(
                "/whoami",
                get(|Extension(session): Extension<Session>| async move { session.name }),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), require_session))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_missing_marker_is_unauthorized() {
        let response = app()
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_marker_reaches_handler() {
        let marker = urlencoding::encode(r#"{"email":"admin@gmail.com","name":"Admin Umroh"}"#);
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("session_marker={marker}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Admin Umroh");
    }

    #[tokio::test]
    async fn test_corrupt_marker_is_cleared() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, "session_marker=not-json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("removal cookie")
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("session_marker="));
        assert!(set_cookie.contains("Max-Age=0"));
    }
}
