//! Reading streaks from activity days.
//!
//! Fills `currentStreak` / `longestStreak` when only the raw activity days
//! are at hand (imports, fixtures, backfills).

use crate::error::{DewiiError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    /// Consecutive days ending today or yesterday
    pub current_streak: u32,
    /// Longest run of consecutive days
    pub longest_streak: u32,
    /// Distinct days with activity
    pub active_days: u32,
}

/// Calculate streaks from activity days relative to `today`
pub fn calculate_streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakStats {
    let mut days = dates.to_vec();
    days.sort();
    days.dedup();

    let Some(&last_day) = days.last() else {
        return StreakStats::default();
    };

    let mut longest_streak = 1u32;
    let mut streak = 1u32;
    for window in days.windows(2) {
        if window[0].succ_opt() == Some(window[1]) {
            streak += 1;
            longest_streak = longest_streak.max(streak);
        } else {
            streak = 1;
        }
    }

    // `streak` now holds the run ending at the last active day
    let current_streak = if last_day == today || Some(last_day) == today.pred_opt() {
        streak
    } else {
        0
    };

    StreakStats {
        current_streak,
        longest_streak,
        active_days: days.len() as u32,
    }
}

/// Parse `YYYY-MM-DD` activity days
pub fn parse_dates<S: AsRef<str>>(raw: &[S]) -> Result<Vec<NaiveDate>> {
    raw.iter()
        .map(|s| {
            let s = s.as_ref().trim();
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| DewiiError::InvalidDate(format!("'{}': {}", s, e)))
        })
        .collect()
}
