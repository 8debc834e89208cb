// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter/group engine for the itinerary list.
//!
//! Pure: the same activities and filter always produce the same grouping.

use std::collections::BTreeMap;

use crate::models::{Activity, ActivityType};

/// Which activities to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewFilter {
    /// Only this day, when set
    pub day: Option<u8>,
    /// Only this type, when set
    pub kind: Option<ActivityType>,
    /// Include checked-off activities
    pub show_completed: bool,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            day: None,
            kind: None,
            show_completed: true,
        }
    }
}

impl ViewFilter {
    /// Whether a day or type restriction is active.
    pub fn is_filtered(&self) -> bool {
        self.day.is_some() || self.kind.is_some()
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        self.day.is_none_or(|day| activity.day == day)
            && self.kind.is_none_or(|kind| activity.kind == kind)
            && (self.show_completed || !activity.completed)
    }
}

/// Activities grouped by day, days ascending, each day sorted by time.
pub type GroupedView = BTreeMap<u8, Vec<Activity>>;

/// Filter, bucket by day and sort each bucket by `time`.
///
/// Times are zero-padded `HH:MM`, so string order is chronological. The
/// sort is stable: activities at the same time keep collection order.
pub fn view(activities: &[Activity], filter: &ViewFilter) -> GroupedView {
    let mut grouped = GroupedView::new();
    for activity in activities.iter().filter(|a| filter.matches(a)) {
        grouped
            .entry(activity.day)
            .or_default()
            .push(activity.clone());
    }

    for bucket in grouped.values_mut() {
        bucket.sort_by(|a, b| a.time.cmp(&b.time));
    }
    grouped
}

/// Number of activities across all buckets.
pub fn view_len(grouped: &GroupedView) -> usize {
    grouped.values().map(Vec::len).sum()
}
