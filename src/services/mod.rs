// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity_store;
pub mod itinerary;
pub mod pwa_status;
pub mod reference;
pub mod session;
pub mod view;

pub use activity_store::{ActivityStore, ImportError};
pub use session::{AuthError, SessionStore};
pub use view::{view, GroupedView, ViewFilter};
