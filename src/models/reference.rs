// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static reference data models: hotels and the uniform schedule.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Where a hotel sits in the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum HotelType {
    /// Airport transit hotel before departure
    Transit,
    /// Hotels in Madinah and Makkah
    Umroh,
}

/// A hotel the group stays at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Contact number, empty when none is published
    pub phone: String,
    /// Stay dates as display text
    pub dates: String,
    /// City label
    pub location: String,
    #[serde(rename = "type")]
    pub kind: HotelType,
}

/// Dress code for one itinerary day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Uniform {
    /// Long day-date, e.g. "Senin, 18 Agustus 2025"
    pub date: String,
    pub male: String,
    pub female: String,
    pub description: String,
}
