// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for logged-in users.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType, Progress, Session, Uniform};
use crate::services::itinerary::DayInfo;
use crate::services::reference::uniform_for_day;
use crate::services::view::view_len;
use crate::services::{view, ActivityStore, ViewFilter};
use crate::storage::CookieStore;
use crate::time_utils::export_file_name;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::header,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// API routes (require a session marker).
/// The session middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/activities", get(list_activities))
        .route("/api/activities/export", get(export_activities))
        .route("/api/activities/import", post(import_activities))
        .route("/api/activities/reset", post(reset_activities))
        .route("/api/activities/{id}", get(get_activity))
        .route("/api/activities/{id}/toggle", post(toggle_activity))
}

/// Activity store over this request's cookies.
fn load_store(state: &AppState, jar: CookieJar) -> ActivityStore<CookieStore> {
    ActivityStore::load(CookieStore::new(jar, state.config.secure_cookies()))
}

// ─── Session ─────────────────────────────────────────────────

/// Get the logged-in user.
async fn get_me(Extension(session): Extension<Session>) -> Json<Session> {
    Json(session)
}

// ─── Activity list ───────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct ActivitiesQuery {
    /// Only this day
    #[validate(range(min = 1, max = 11))]
    day: Option<u8>,
    /// Only this activity type; `type=` means no type filter
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    kind: Option<ActivityType>,
    /// Include checked-off activities (config default when absent)
    show_completed: Option<bool>,
}

/// Treat an empty query value as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StrDeserializer<'_, D::Error> = value.into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}

/// One day of the grouped view.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayGroup {
    pub day: DayInfo,
    pub activities: Vec<Activity>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    /// Days with at least one matching activity, ascending
    pub days: Vec<DayGroup>,
    /// Number of matching activities
    pub count: usize,
    /// Whether a day or type filter is active
    pub filtered: bool,
    /// Progress over the whole itinerary, ignoring the filter
    pub progress: Progress,
}

/// Filtered, grouped and sorted activity list.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    query: std::result::Result<Query<ActivitiesQuery>, QueryRejection>,
) -> Result<(CookieJar, Json<ActivitiesResponse>)> {
    let Query(params) = query?;
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let filter = ViewFilter {
        day: params.day,
        kind: params.kind,
        show_completed: params
            .show_completed
            .unwrap_or(state.config.show_completed_default),
    };

    let store = load_store(&state, jar);
    let grouped = view(store.activities(), &filter);
    let count = view_len(&grouped);

    let response = ActivitiesResponse {
        days: grouped
            .into_iter()
            .map(|(day, activities)| DayGroup {
                day: DayInfo::for_day(day),
                activities,
            })
            .collect(),
        count,
        filtered: filter.is_filtered(),
        progress: store.progress(),
    };

    Ok((store.into_inner().into_jar(), Json(response)))
}

// ─── Activity detail ─────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityDetail {
    pub activity: Activity,
    pub day: DayInfo,
    /// Indonesian label of the activity type
    pub type_label: String,
    /// Uniform worn that day, if one is scheduled
    pub uniform: Option<Uniform>,
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<(CookieJar, Json<ActivityDetail>)> {
    let store = load_store(&state, jar);
    let activity = store
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

    let detail = ActivityDetail {
        day: DayInfo::for_day(activity.day),
        type_label: activity.kind.label().to_string(),
        uniform: uniform_for_day(activity.day),
        activity,
    };

    Ok((store.into_inner().into_jar(), Json(detail)))
}

// ─── Mutations ───────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ToggleResponse {
    pub activity: Activity,
    pub progress: Progress,
}

/// Flip the completed flag of one activity and persist the collection.
async fn toggle_activity(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<(CookieJar, Json<ToggleResponse>)> {
    let mut store = load_store(&state, jar);
    if !store.toggle(&id) {
        return Err(AppError::NotFound(format!("Activity {} not found", id)));
    }

    let activity = store
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Toggled activity {} vanished", id)))?;
    let progress = store.progress();

    Ok((
        store.into_inner().into_jar(),
        Json(ToggleResponse { activity, progress }),
    ))
}

#[derive(Deserialize, Default)]
struct ResetRequest {
    /// The user confirmed the reset
    #[serde(default)]
    confirm: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResetResponse {
    /// Whether the collection was replaced
    pub reset: bool,
    pub progress: Progress,
}

/// Restore the seed collection. Without confirmation (or without a body)
/// nothing changes.
async fn reset_activities(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Option<Json<ResetRequest>>,
) -> (CookieJar, Json<ResetResponse>) {
    let body = body.map(|Json(body)| body).unwrap_or_default();
    let mut store = load_store(&state, jar);
    let reset = store.reset(|| body.confirm);
    let progress = store.progress();

    (
        store.into_inner().into_jar(),
        Json(ResetResponse { reset, progress }),
    )
}

// ─── Import / export ─────────────────────────────────────────

/// Download the collection as a dated JSON file.
async fn export_activities(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<(CookieJar, [(header::HeaderName, String); 2], String)> {
    let store = load_store(&state, jar);
    let document = store
        .export()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Export failed: {}", e)))?;

    let file_name = export_file_name(chrono::Utc::now());
    tracing::info!(file = %file_name, "Exporting activities");

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ),
    ];

    Ok((store.into_inner().into_jar(), headers, document))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ImportResponse {
    pub imported: usize,
    pub progress: Progress,
}

/// Replace the collection with an uploaded export file.
async fn import_activities(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: String,
) -> Result<(CookieJar, Json<ImportResponse>)> {
    let mut store = load_store(&state, jar);
    let imported = store
        .import(&body)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected activity import");
            e
        })?
        .len();
    let progress = store.progress();

    Ok((
        store.into_inner().into_jar(),
        Json(ImportResponse { imported, progress }),
    ))
}
