// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session marker store.
//!
//! Login is a literal comparison against one configured credential pair. It
//! gates the UI; it is not a security boundary.

use chrono::Duration;

use crate::config::Credentials;
use crate::models::Session;
use crate::storage::{keys, KeyValueStore};

/// Lifetime of the session marker.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Login rejected. Deliberately does not say which half was wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid email or password")]
pub struct AuthError;

/// Reads and writes the session marker in a [`KeyValueStore`].
#[derive(Debug)]
pub struct SessionStore<'a, S: KeyValueStore> {
    store: S,
    credentials: &'a Credentials,
}

impl<'a, S: KeyValueStore> SessionStore<'a, S> {
    pub fn new(store: S, credentials: &'a Credentials) -> Self {
        Self { store, credentials }
    }

    /// Check the credential pair and persist a session marker on success.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email != self.credentials.email || password != self.credentials.password {
            tracing::info!("Login rejected");
            return Err(AuthError);
        }

        let session = Session {
            email: email.to_string(),
            name: self.credentials.name.clone(),
        };

        match serde_json::to_string(&session) {
            Ok(marker) => self.store.set(
                keys::SESSION_MARKER,
                marker,
                Some(Duration::days(SESSION_TTL_DAYS)),
            ),
            Err(e) => tracing::error!(error = %e, "Failed to serialize session marker"),
        }

        tracing::info!(email = %session.email, "Login succeeded");
        Ok(session)
    }

    /// Clear the session marker. Activity data is left alone.
    pub fn logout(&mut self) {
        self.store.remove(keys::SESSION_MARKER);
        tracing::info!("Logged out");
    }

    /// Read the persisted session, if any.
    ///
    /// A marker that does not parse is removed and treated as logged out.
    pub fn restore(&mut self) -> Option<Session> {
        let raw = self.store.get(keys::SESSION_MARKER)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "Persisted session marker is corrupt, discarding");
                self.store.remove(keys::SESSION_MARKER);
                None
            }
        }
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
