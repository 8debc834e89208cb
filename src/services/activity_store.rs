// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity checklist store.
//!
//! Owns the activity collection for one store lifetime and is its only
//! writer. Every mutation (toggle, reset, import) persists the full
//! collection before returning, so a reload never loses the latest change.
//!
//! Lifecycle: [`ActivityStore::load`] reads the persisted snapshot (or falls
//! back to the seed), mutations go through the store, and
//! [`ActivityStore::into_inner`] hands the backing key-value store back to
//! the caller.

use std::collections::HashSet;

use chrono::Duration;
use validator::Validate;

use crate::models::{Activity, Progress};
use crate::services::itinerary::seed_activities;
use crate::storage::{keys, KeyValueStore};

/// Lifetime of the persisted snapshot.
pub const SNAPSHOT_TTL_DAYS: i64 = 30;

/// Rejected import file. The current collection is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("not a JSON array of activities: {0}")]
    Parse(String),

    #[error("activity at index {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("duplicate activity id {0:?}")]
    DuplicateId(String),
}

/// Checklist state backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct ActivityStore<S: KeyValueStore> {
    store: S,
    activities: Vec<Activity>,
}

impl<S: KeyValueStore> ActivityStore<S> {
    /// Load the persisted snapshot, falling back to the seed collection.
    ///
    /// A snapshot that fails to decode is logged, removed and replaced by
    /// the seed; this never fails.
    pub fn load(mut store: S) -> Self {
        let activities = match store.get(keys::ACTIVITY_SNAPSHOT) {
            None => {
                tracing::debug!("No saved activities found, using seed");
                seed_activities()
            }
            Some(raw) => match decode_snapshot(&raw) {
                Ok(activities) => {
                    tracing::debug!(count = activities.len(), "Loaded saved activities");
                    activities
                }
                Err(reason) => {
                    tracing::warn!(error = %reason, "Persisted activity snapshot is corrupt, using seed");
                    store.remove(keys::ACTIVITY_SNAPSHOT);
                    seed_activities()
                }
            },
        };

        Self { store, activities }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn find(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn progress(&self) -> Progress {
        Progress::from_activities(&self.activities)
    }

    /// Flip the completion flag of `id` and persist.
    ///
    /// Returns `false` (and writes nothing) when no activity has that id.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            tracing::debug!(activity_id = id, "Toggle of unknown activity ignored");
            return false;
        }

        self.activities = toggle_activity(&self.activities, id);
        tracing::info!(
            activity_id = id,
            completed = self.progress().completed,
            "Activity toggled"
        );
        self.persist();
        true
    }

    /// Replace the collection with a fresh seed, if `confirm` agrees.
    ///
    /// Returns whether the reset happened.
    pub fn reset(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            tracing::debug!("Reset declined");
            return false;
        }

        tracing::info!("Resetting activities to seed");
        self.activities = seed_activities();
        self.persist();
        true
    }

    /// Serialize the collection as an export document.
    pub fn export(&self) -> Result<String, serde_json::Error> {
        export_activities(&self.activities)
    }

    /// Validate `contents` and, on success, replace the collection and
    /// persist it.
    pub fn import(&mut self, contents: &str) -> Result<&[Activity], ImportError> {
        let activities = parse_import(contents)?;
        tracing::info!(count = activities.len(), "Imported activities");
        self.activities = activities;
        self.persist();
        Ok(self.activities.as_slice())
    }

    /// Write the full collection under the snapshot key.
    ///
    /// The value is plain JSON; a cookie-backed store URL-encodes it once on
    /// the wire.
    pub fn persist(&mut self) {
        match serde_json::to_string(&self.activities) {
            Ok(json) => {
                tracing::debug!(bytes = json.len(), "Saving activity snapshot");
                self.store.set(
                    keys::ACTIVITY_SNAPSHOT,
                    json,
                    Some(Duration::days(SNAPSHOT_TTL_DAYS)),
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize activity snapshot");
            }
        }
    }

    /// Give back the backing store (e.g. to return its cookie jar).
    pub fn into_inner(self) -> S {
        self.store
    }
}

/// New collection equal to `activities` except that `id` has its
/// `completed` flag inverted. Unknown ids yield an unchanged copy.
pub fn toggle_activity(activities: &[Activity], id: &str) -> Vec<Activity> {
    activities
        .iter()
        .map(|activity| {
            if activity.id == id {
                Activity {
                    completed: !activity.completed,
                    ..activity.clone()
                }
            } else {
                activity.clone()
            }
        })
        .collect()
}

/// Pretty JSON array of the collection, the import/export file format.
pub fn export_activities(activities: &[Activity]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(activities)
}

/// Parse and validate an import file.
///
/// Every element must carry `id`, `time`, `title`, `day`, `completed` and
/// `type`; `description` and `location` default to empty. Ids must be
/// unique, days within the itinerary and times `HH:MM`.
pub fn parse_import(contents: &str) -> Result<Vec<Activity>, ImportError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(contents).map_err(|e| ImportError::Parse(e.to_string()))?;

    let mut seen = HashSet::with_capacity(values.len());
    let mut activities = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let activity: Activity =
            serde_json::from_value(value).map_err(|e| ImportError::InvalidRecord {
                index,
                reason: e.to_string(),
            })?;

        activity
            .validate()
            .map_err(|e| ImportError::InvalidRecord {
                index,
                reason: e.to_string(),
            })?;

        if !seen.insert(activity.id.clone()) {
            return Err(ImportError::DuplicateId(activity.id));
        }
        activities.push(activity);
    }

    Ok(activities)
}

/// Parse a snapshot. Values that are still percent-encoded (written by a
/// store that encoded before the cookie layer did) are decoded first.
fn decode_snapshot(raw: &str) -> Result<Vec<Activity>, String> {
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(raw).map_err(|e| e.to_string());
    }
    let json = urlencoding::decode(raw).map_err(|e| e.to_string())?;
    serde_json::from_str(&json).map_err(|e| e.to_string())
}
