// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Connectivity / install status banners and their dismissal list.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::storage::{keys, KeyValueStore};

/// A status banner the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum StatusBanner {
    Offline,
    Online,
    Install,
    Installed,
}

/// Source of the host's online/offline state.
pub trait NetworkStatusSource {
    fn is_online(&self) -> bool;
}

/// Status as reported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportedStatus {
    pub online: bool,
}

impl NetworkStatusSource for ReportedStatus {
    fn is_online(&self) -> bool {
        self.online
    }
}

/// What the shell knows about its install state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallState {
    /// Running as an installed app
    pub installed: bool,
    /// The host offered an install prompt
    pub install_available: bool,
}

/// Banners to show, in display order.
pub fn visible_banners(
    network: &impl NetworkStatusSource,
    install: InstallState,
    dismissed: &[StatusBanner],
) -> Vec<StatusBanner> {
    let online = network.is_online();
    if install.installed && online {
        return Vec::new();
    }

    let candidates = [
        (StatusBanner::Offline, !online),
        (StatusBanner::Online, online && !install.installed),
        (
            StatusBanner::Install,
            install.install_available && !install.installed,
        ),
        (StatusBanner::Installed, install.installed),
    ];

    candidates
        .into_iter()
        .filter(|(banner, shown)| *shown && !dismissed.contains(banner))
        .map(|(banner, _)| banner)
        .collect()
}

/// Read the dismissed list. Absent or corrupt lists read as empty.
pub fn load_dismissed(store: &impl KeyValueStore) -> Vec<StatusBanner> {
    let Some(raw) = store.get(keys::DISMISSED_STATUS_LIST) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(error = %e, "Dismissed status list is corrupt, ignoring");
            Vec::new()
        }
    }
}

/// Add `banner` to the dismissed list (no expiry). Returns the new list.
pub fn dismiss(store: &mut impl KeyValueStore, banner: StatusBanner) -> Vec<StatusBanner> {
    let mut dismissed = load_dismissed(&*store);
    if !dismissed.contains(&banner) {
        dismissed.push(banner);
    }

    match serde_json::to_string(&dismissed) {
        Ok(json) => store.set(keys::DISMISSED_STATUS_LIST, json, None),
        Err(e) => tracing::error!(error = %e, "Failed to serialize dismissed status list"),
    }
    dismissed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const ONLINE: ReportedStatus = ReportedStatus { online: true };
    const OFFLINE: ReportedStatus = ReportedStatus { online: false };

    fn install(installed: bool, install_available: bool) -> InstallState {
        InstallState {
            installed,
            install_available,
        }
    }

    #[test]
    fn test_installed_and_online_shows_nothing() {
        assert!(visible_banners(&ONLINE, install(true, true), &[]).is_empty());
    }

    #[test]
    fn test_browser_online_with_prompt() {
        assert_eq!(
            visible_banners(&ONLINE, install(false, true), &[]),
            vec![StatusBanner::Online, StatusBanner::Install]
        );
    }

    #[test]
    fn test_installed_offline() {
        assert_eq!(
            visible_banners(&OFFLINE, install(true, false), &[]),
            vec![StatusBanner::Offline, StatusBanner::Installed]
        );
    }

    #[test]
    fn test_dismissed_banners_are_hidden() {
        assert_eq!(
            visible_banners(&OFFLINE, install(false, true), &[StatusBanner::Offline]),
            vec![StatusBanner::Install]
        );
    }

    #[test]
    fn test_dismiss_persists_without_duplicates() {
        let mut store = MemoryStore::new();
        dismiss(&mut store, StatusBanner::Online);
        let list = dismiss(&mut store, StatusBanner::Online);
        assert_eq!(list, vec![StatusBanner::Online]);

        assert_eq!(load_dismissed(&store), vec![StatusBanner::Online]);
        assert_eq!(store.expires_at(keys::DISMISSED_STATUS_LIST), None);
        assert_eq!(
            store.get(keys::DISMISSED_STATUS_LIST).as_deref(),
            Some("[\"online\"]")
        );
    }

    #[test]
    fn test_corrupt_list_reads_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::DISMISSED_STATUS_LIST, "[oops".to_string(), None);
        assert!(load_dismissed(&store).is_empty());

        assert_eq!(
            dismiss(&mut store, StatusBanner::Offline),
            vec![StatusBanner::Offline]
        );
    }
}
