// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod reference;
pub mod session;
pub mod stats;

pub use activity::{Activity, ActivityType, DAY_COUNT};
pub use reference::{Hotel, HotelType, Uniform};
pub use session::Session;
pub use stats::Progress;
