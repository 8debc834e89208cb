// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Itinerary activity model for storage, import/export and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::time_utils::is_clock_time;

/// Number of days in the itinerary.
pub const DAY_COUNT: u8 = 11;

/// Category of an itinerary activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    Transport,
    Ritual,
    Meal,
    Accommodation,
    Sightseeing,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        ActivityType::Transport,
        ActivityType::Ritual,
        ActivityType::Meal,
        ActivityType::Accommodation,
        ActivityType::Sightseeing,
    ];

    /// Indonesian display label.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Transport => "Transportasi",
            ActivityType::Ritual => "Ibadah",
            ActivityType::Meal => "Makan",
            ActivityType::Accommodation => "Akomodasi",
            ActivityType::Sightseeing => "Wisata",
        }
    }
}

/// A single scheduled activity.
///
/// `completed` is the only field that changes during normal use. The JSON
/// shape is shared by the persisted snapshot and the import/export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Stable identifier, `"<day>-<sequence>"`
    #[validate(length(min = 1))]
    pub id: String,
    /// Zero-padded 24-hour `HH:MM`; sorts lexicographically
    #[validate(custom(function = "validate_clock_time"))]
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Itinerary day, 1-based
    #[validate(range(min = 1, max = 11))]
    pub day: u8,
    pub completed: bool,
    #[serde(rename = "type")]
    pub kind: ActivityType,
}

fn validate_clock_time(time: &str) -> Result<(), ValidationError> {
    if is_clock_time(time) {
        Ok(())
    } else {
        Err(ValidationError::new("clock_time"))
    }
}
