//! XP Calculator
//!
//! Total XP is the sum of eight independent sources. Every call site
//! (profile header, level badge, leaderboard) goes through [`compute_xp`].
//!
//! | Source        | Rule                                                   |
//! |---------------|--------------------------------------------------------|
//! | reading       | articles read x 50                                     |
//! | achievements  | achievements held x 100                                |
//! | streak        | longest streak x 30                                    |
//! | sharing       | highest share tier milestone x 20                      |
//! | creation      | highest creation tier milestone x 150                  |
//! | consistency   | current streak x 10, when current == longest and >= 7  |
//! | volume        | +200 / +500 / +1000 at 10 / 20 / 30 achievements       |
//! | completionist | +5000                                                  |

use crate::achievements::{
    highest_milestone, volume_bonus, KnownAchievement, CREATION_TIERS,
    CREATION_XP_PER_MILESTONE, SHARE_TIERS, SHARE_XP_PER_MILESTONE,
};
use crate::progress::UserProgress;
use serde::{Deserialize, Serialize};

pub const XP_PER_ARTICLE: u64 = 50;
pub const XP_PER_ACHIEVEMENT: u64 = 100;
pub const XP_PER_STREAK_DAY: u64 = 30;
pub const CONSISTENCY_XP_PER_DAY: u64 = 10;
pub const CONSISTENCY_MIN_STREAK: u64 = 7;
pub const COMPLETIONIST_BONUS: u64 = 5000;

/// XP contribution of each source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpBreakdown {
    pub reading: u64,
    pub achievements: u64,
    pub streak: u64,
    pub sharing: u64,
    pub creation: u64,
    pub consistency: u64,
    pub volume: u64,
    pub completionist: u64,
}

impl XpBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.reading,
            self.achievements,
            self.streak,
            self.sharing,
            self.creation,
            self.consistency,
            self.volume,
            self.completionist,
        ]
        .iter()
        .fold(0u64, |acc, xp| acc.saturating_add(*xp))
    }

    /// (label, xp) pairs in display order
    pub fn entries(&self) -> [(&'static str, u64); 8] {
        [
            ("reading", self.reading),
            ("achievements", self.achievements),
            ("streak", self.streak),
            ("sharing", self.sharing),
            ("creation", self.creation),
            ("consistency", self.consistency),
            ("volume", self.volume),
            ("completionist", self.completionist),
        ]
    }
}

/// Per-source XP for a progress record
pub fn xp_breakdown(progress: &UserProgress) -> XpBreakdown {
    let count = progress.achievement_count();
    let held = &progress.achievements;

    let consistent = progress.current_streak == progress.longest_streak
        && progress.current_streak >= CONSISTENCY_MIN_STREAK;

    XpBreakdown {
        reading: progress.total_articles_read.saturating_mul(XP_PER_ARTICLE),
        achievements: (count as u64).saturating_mul(XP_PER_ACHIEVEMENT),
        streak: progress.longest_streak.saturating_mul(XP_PER_STREAK_DAY),
        sharing: highest_milestone(SHARE_TIERS, held) * SHARE_XP_PER_MILESTONE,
        creation: highest_milestone(CREATION_TIERS, held) * CREATION_XP_PER_MILESTONE,
        consistency: if consistent {
            progress.current_streak.saturating_mul(CONSISTENCY_XP_PER_DAY)
        } else {
            0
        },
        volume: volume_bonus(count),
        completionist: if progress.has(&KnownAchievement::Completionist.into()) {
            COMPLETIONIST_BONUS
        } else {
            0
        },
    }
}

/// Total XP for a progress record
pub fn compute_xp(progress: &UserProgress) -> u64 {
    xp_breakdown(progress).total()
}
