// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session cookie tests.
//!
//! Login and logout are driven through the router; the session marker and
//! the activity snapshot live only in the cookies the client sends back.

use axum::http::StatusCode;
use umroh_itinerary::config::Config;

mod common;
use common::TestClient;

#[tokio::test]
async fn test_login_sets_session_marker() {
    let (app, _) = common::create_test_app();
    let mut client = TestClient::new(app);

    let response = client
        .post_json(
            "/auth/login",
            r#"{"email":"admin@gmail.com","password":"admin"}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["email"], "admin@gmail.com");
    assert_eq!(body["name"], "Admin Umroh");

    let cookie = response.set_cookie("session_marker").expect("session cookie");
    assert!(cookie.contains("HttpOnly"), "{cookie}");
    assert!(cookie.contains("SameSite=Lax"), "{cookie}");
    assert!(cookie.contains("Path=/"), "{cookie}");
    assert!(cookie.contains("Max-Age=604800"), "{cookie}");
    assert!(!cookie.contains("Secure"), "{cookie}");
}

#[tokio::test]
async fn test_login_rejects_wrong_password_generically() {
    let (app, _) = common::create_test_app();
    let mut client = TestClient::new(app);

    for body in [
        r#"{"email":"admin@gmail.com","password":"wrong"}"#,
        r#"{"email":"someone@gmail.com","password":"admin"}"#,
    ] {
        let response = client.post_json("/auth/login", body).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["error"], "invalid_credentials");
        assert!(response.set_cookie("session_marker").is_none());
    }
    assert!(client.cookies.is_empty());
}

#[tokio::test]
async fn test_secure_cookies_for_https_frontend() {
    let config = Config {
        frontend_url: "https://umroh.example.org".to_string(),
        ..Config::default()
    };
    let (app, _) = common::create_test_app_with_config(config);
    let mut client = TestClient::new(app);

    let response = client
        .post_json(
            "/auth/login",
            r#"{"email":"admin@gmail.com","password":"admin"}"#,
        )
        .await;
    let cookie = response.set_cookie("session_marker").unwrap();
    assert!(cookie.contains("Secure"), "{cookie}");
}

#[tokio::test]
async fn test_configured_credentials() {
    let mut config = Config::default();
    config.credentials.email = "jamaah@example.org".to_string();
    config.credentials.password = "labbaik".to_string();
    config.credentials.name = "Jamaah".to_string();
    let (app, _) = common::create_test_app_with_config(config);
    let mut client = TestClient::new(app);

    let rejected = client
        .post_json(
            "/auth/login",
            r#"{"email":"admin@gmail.com","password":"admin"}"#,
        )
        .await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);

    let accepted = client
        .post_json(
            "/auth/login",
            r#"{"email":"jamaah@example.org","password":"labbaik"}"#,
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(client.get("/api/me").await.json()["name"], "Jamaah");
}

#[tokio::test]
async fn test_session_restores_across_requests() {
    let (app, _) = common::create_test_app();
    let mut client = TestClient::logged_in(app).await;

    let response = client.get("/api/me").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "Admin Umroh");
}

#[tokio::test]
async fn test_api_requires_session() {
    let (app, _) = common::create_test_app();
    let mut client = TestClient::new(app);

    for uri in ["/api/me", "/api/activities", "/api/hotels", "/api/status"] {
        let response = client.get(uri).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(response.json()["error"], "unauthorized");
    }
}

#[tokio::test]
async fn test_logout_removes_marker_but_keeps_progress() {
    let (app, _) = common::create_test_app();
    let mut client = TestClient::logged_in(app).await;

    let toggled = client.post("/api/activities/1-1/toggle").await;
    assert_eq!(toggled.status, StatusCode::OK);
    assert!(client.has_key("activity_snapshot"));

    let response = client.post("/auth/logout").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let removal = response.set_cookie("session_marker").expect("removal cookie");
    assert!(removal.contains("Max-Age=0"), "{removal}");
    assert!(removal.contains("Path=/"), "{removal}");
    assert!(!response.writes_key("activity_snapshot"));

    assert!(!client.cookies.contains_key("session_marker"));
    assert!(client.has_key("activity_snapshot"));
    assert_eq!(client.get("/api/me").await.status, StatusCode::UNAUTHORIZED);

    // Logging back in finds the earlier progress
    let relogin = client
        .post_json(
            "/auth/login",
            r#"{"email":"admin@gmail.com","password":"admin"}"#,
        )
        .await;
    assert_eq!(relogin.status, StatusCode::OK);
    let list = client.get("/api/activities").await.json();
    assert_eq!(list["progress"]["completed"], 1);
}

#[tokio::test]
async fn test_corrupt_session_marker_is_cleared() {
    let (app, _) = common::create_test_app();
    let mut client = TestClient::new(app);
    client
        .cookies
        .insert("session_marker".to_string(), "garbage".to_string());

    let response = client.get("/api/me").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response
        .set_cookie("session_marker")
        .unwrap()
        .contains("Max-Age=0"));
    assert!(client.cookies.is_empty());
}
