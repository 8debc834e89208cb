// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Umroh Itinerary: checklist tracking for a fixed pilgrimage schedule
//!
//! This crate provides the state, persistence and offline-caching core of the
//! itinerary app, plus a stateless HTTP host whose per-user state lives
//! entirely in client cookies.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod offline;
pub mod routes;
pub mod services;
pub mod storage;
pub mod time_utils;

use config::Config;

/// Shared application state.
///
/// Everything here is immutable; per-user state travels in the cookie jar
/// of each request.
pub struct AppState {
    pub config: Config,
}
