// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cookie-equivalent key-value persistence.
//!
//! The stores never touch cookies or memory directly; they go through
//! [`KeyValueStore`] so they can run against a request's cookie jar in the
//! HTTP host and against [`MemoryStore`] in tests.

pub mod cookie;
pub mod memory;

pub use cookie::CookieStore;
pub use memory::MemoryStore;

use chrono::Duration;

/// Persisted entry names.
pub mod keys {
    /// Serialized `{email, name}` of the logged-in user
    pub const SESSION_MARKER: &str = "session_marker";
    /// JSON of the full activity collection, split into parts when long
    pub const ACTIVITY_SNAPSHOT: &str = "activity_snapshot";
    /// JSON array of dismissed status banners
    pub const DISMISSED_STATUS_LIST: &str = "dismissed_status_list";
}

/// Small persistent string map with per-entry expiry.
///
/// Writes are best-effort: the host may evict entries at any time, so
/// readers must treat absence as a normal outcome.
pub trait KeyValueStore {
    /// Current value, `None` when absent or expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value`. `ttl` of `None` means no expiry.
    fn set(&mut self, key: &str, value: String, ttl: Option<Duration>);

    fn remove(&mut self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String, ttl: Option<Duration>) {
        (**self).set(key, value, ttl)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}
