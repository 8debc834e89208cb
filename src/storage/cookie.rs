// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value store over a request's cookie jar.
//!
//! Reads see the cookies the client sent plus anything written during the
//! request; writes become `Set-Cookie` headers once the jar is returned from
//! the handler. The jar percent-encodes values on the way out and decodes
//! them on the way in, so callers store plain strings.
//!
//! Browsers drop any cookie larger than [`MAX_COOKIE_BYTES`]. A value whose
//! encoded form does not fit in one cookie is split across `<key>.0`,
//! `<key>.1`, ... with the number of parts in `<key>.count`; all parts share
//! the attributes and expiry of the write.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Duration;

use super::{keys, KeyValueStore};

/// Largest `Set-Cookie` value a browser keeps.
pub const MAX_COOKIE_BYTES: usize = 4096;

/// Encoded value bytes per cookie; the rest is left for name and attributes.
const CHUNK_VALUE_BYTES: usize = 3800;

/// Most parts one value may span.
const MAX_CHUNKS: usize = 32;

/// Cookie-backed store for one request/response cycle.
#[derive(Debug, Clone)]
pub struct CookieStore {
    jar: CookieJar,
    secure: bool,
}

impl CookieStore {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    /// Hand the jar back so the handler can return it as response headers.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    fn add(&mut self, name: String, value: String, key: &str, ttl: Option<Duration>) {
        let builder = Cookie::build((name, value))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(key == keys::SESSION_MARKER)
            .secure(self.secure);

        let cookie = match ttl {
            Some(ttl) => builder.max_age(time::Duration::seconds(ttl.num_seconds())),
            None => builder.permanent(),
        };

        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }

    fn remove_cookie(&mut self, name: String) {
        // Removal must match the path the cookie was created with.
        let removal = Cookie::build((name, "")).path("/");
        self.jar = std::mem::take(&mut self.jar).remove(removal);
    }

    /// Drop every `<key>.N` part and the `<key>.count` entry.
    fn remove_chunks(&mut self, key: &str) {
        let prefix = format!("{key}.");
        let names: Vec<String> = self
            .jar
            .iter()
            .map(|cookie| cookie.name())
            .filter(|name| {
                name.strip_prefix(&prefix)
                    .is_some_and(|rest| rest == "count" || rest.parse::<usize>().is_ok())
            })
            .map(str::to_string)
            .collect();

        for name in names {
            self.remove_cookie(name);
        }
    }

    fn get_chunked(&self, key: &str) -> Option<String> {
        let count: usize = self.jar.get(&count_name(key))?.value().parse().ok()?;
        if count == 0 || count > MAX_CHUNKS {
            return None;
        }

        // A missing part means the browser dropped it; treat the value as gone.
        (0..count)
            .map(|index| {
                self.jar
                    .get(&chunk_name(key, index))
                    .map(|cookie| cookie.value().to_string())
            })
            .collect()
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.jar.get(key) {
            Some(cookie) => Some(cookie.value().to_string()),
            None => self.get_chunked(key),
        }
    }

    fn set(&mut self, key: &str, value: String, ttl: Option<Duration>) {
        self.remove_chunks(key);

        if encoded_len(&value) <= CHUNK_VALUE_BYTES {
            self.add(key.to_string(), value, key, ttl);
            return;
        }

        let chunks = split_encoded(&value, CHUNK_VALUE_BYTES);
        self.remove_cookie(key.to_string());
        if chunks.len() > MAX_CHUNKS {
            tracing::warn!(key, chunks = chunks.len(), "Value too long for cookies, not saved");
            return;
        }

        tracing::debug!(key, chunks = chunks.len(), "Splitting value across cookies");
        for (index, chunk) in chunks.iter().enumerate() {
            self.add(chunk_name(key, index), chunk.to_string(), key, ttl);
        }
        self.add(count_name(key), chunks.len().to_string(), key, ttl);
    }

    fn remove(&mut self, key: &str) {
        self.remove_chunks(key);
        self.remove_cookie(key.to_string());
    }
}

fn chunk_name(key: &str, index: usize) -> String {
    format!("{key}.{index}")
}

fn count_name(key: &str) -> String {
    format!("{key}.count")
}

/// Length of `value` once percent-encoded by the jar.
fn encoded_len(value: &str) -> usize {
    // Renders as "=<encoded value>" for an empty name.
    Cookie::new("", value).encoded().stripped().to_string().len() - 1
}

/// Split `value` on character boundaries into parts whose encoded length
/// stays within `budget`.
fn split_encoded(value: &str, budget: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut used = 0;
    let mut buf = [0u8; 4];

    for (offset, ch) in value.char_indices() {
        let cost = if ch.is_ascii_alphanumeric() {
            1
        } else {
            encoded_len(ch.encode_utf8(&mut buf))
        };
        if used + cost > budget && offset > start {
            chunks.push(&value[start..offset]);
            start = offset;
            used = 0;
        }
        used += cost;
    }
    chunks.push(&value[start..]);
    chunks
}
