// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only reference data and status banner routes.

use crate::error::Result;
use crate::models::{Hotel, HotelType, Uniform};
use crate::services::itinerary::{days, DayInfo};
use crate::services::pwa_status::{
    dismiss, load_dismissed, visible_banners, InstallState, ReportedStatus, StatusBanner,
};
use crate::services::reference::{hotels_of_type, uniforms};
use crate::storage::CookieStore;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/hotels", get(get_hotels))
        .route("/api/uniforms", get(get_uniforms))
        .route("/api/days", get(get_days))
        .route("/api/status", get(get_status))
        .route("/api/status/{banner}/dismiss", post(dismiss_banner))
}

// ─── Reference data ──────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HotelsResponse {
    pub transit: Vec<Hotel>,
    pub umroh: Vec<Hotel>,
}

async fn get_hotels() -> Json<HotelsResponse> {
    Json(HotelsResponse {
        transit: hotels_of_type(HotelType::Transit),
        umroh: hotels_of_type(HotelType::Umroh),
    })
}

async fn get_uniforms() -> Json<Vec<Uniform>> {
    Json(uniforms())
}

async fn get_days() -> Json<Vec<DayInfo>> {
    Json(days())
}

// ─── Status banners ──────────────────────────────────────────

#[derive(Deserialize)]
struct StatusQuery {
    #[serde(default = "default_online")]
    online: bool,
    #[serde(default)]
    installed: bool,
    #[serde(default)]
    install_available: bool,
}

fn default_online() -> bool {
    true
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatusResponse {
    /// Banners to show, in display order
    pub banners: Vec<StatusBanner>,
    pub dismissed: Vec<StatusBanner>,
}

/// Banners for the state the client reports.
async fn get_status(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    query: std::result::Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<StatusResponse>> {
    let Query(params) = query?;
    let store = CookieStore::new(jar, state.config.secure_cookies());
    let dismissed = load_dismissed(&store);
    let network = ReportedStatus {
        online: params.online,
    };
    let install = InstallState {
        installed: params.installed,
        install_available: params.install_available,
    };

    Ok(Json(StatusResponse {
        banners: visible_banners(&network, install, &dismissed),
        dismissed,
    }))
}

/// Hide a banner for good.
async fn dismiss_banner(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(banner): Path<StatusBanner>,
) -> (CookieJar, Json<Vec<StatusBanner>>) {
    let mut store = CookieStore::new(jar, state.config.secure_cookies());
    let dismissed = dismiss(&mut store, banner);
    tracing::debug!(?banner, "Dismissed status banner");

    (store.into_jar(), Json(dismissed))
}
