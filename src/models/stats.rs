//! Checklist progress statistics.
//!
//! Always computed over the full collection, never over a filtered view, so
//! the percentage does not move when the user narrows the list.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;

/// Progress over the whole itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Progress {
    /// Number of activities in the collection
    pub total: usize,
    /// Activities checked off
    pub completed: usize,
    /// Activities still open
    pub remaining: usize,
    /// `round(completed / total * 100)`, 0 for an empty collection
    pub percentage: u8,
}

impl Progress {
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total = activities.len();
        let completed = activities.iter().filter(|a| a.completed).count();
        Self {
            total,
            completed,
            remaining: total - completed,
            percentage: percentage(completed, total),
        }
    }
}

fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // completed <= total, so the result is within 0..=100
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn activities(total: usize, completed: usize) -> Vec<Activity> {
        (0..total)
            .map(|i| Activity {
                id: format!("1-{}", i + 1),
                time: "08:00".to_string(),
                title: format!("Activity {}", i + 1),
                description: String::new(),
                location: String::new(),
                day: 1,
                completed: i < completed,
                kind: ActivityType::Meal,
            })
            .collect()
    }

    #[test]
    fn test_two_of_fifty_three_rounds_to_four() {
        let progress = Progress::from_activities(&activities(53, 2));
        assert_eq!(progress.total, 53);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.remaining, 51);
        assert_eq!(progress.percentage, 4);
    }

    #[test]
    fn test_empty_collection_is_zero_percent() {
        assert_eq!(Progress::from_activities(&[]), Progress::default());
    }

    #[test]
    fn test_all_completed_is_one_hundred() {
        let progress = Progress::from_activities(&activities(7, 7));
        assert_eq!(progress.percentage, 100);
        assert_eq!(progress.remaining, 0);
    }

    #[test]
    fn test_half_rounds_up() {
        // 1/8 = 12.5%
        assert_eq!(percentage(1, 8), 13);
    }
}
