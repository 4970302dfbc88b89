//! Progression Engine
//!
//! Turns a [`UserProgress`] record into everything a profile header, level
//! badge or progress bar needs. Pure and stateless: the engine is built once
//! and shared by reference.

use crate::levels::{level_progress, LevelCurve};
use crate::progress::UserProgress;
use crate::titles::{TitleTable, VisualTier};
use crate::xp::{xp_breakdown, XpBreakdown};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived view of a reader's progress, recomputed on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedProgression {
    pub total_xp: u64,
    /// Always at least 1
    pub level: u32,
    pub level_title: String,
    pub visual_tier: VisualTier,
    pub xp_for_current_level: u64,
    pub xp_for_next_level: u64,
    pub xp_to_next_level: u64,
    /// Always within 0.0..=100.0
    pub level_progress_percent: f64,
    /// Shop balance, copied from the input
    pub points: u64,
    pub breakdown: XpBreakdown,
}

/// A level crossed between two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUp {
    pub level: u32,
    pub title: String,
    /// Set when this level starts a new title band
    pub new_title: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    titles: TitleTable,
    curve: LevelCurve,
}

impl ProgressionEngine {
    pub fn new(titles: TitleTable) -> Self {
        Self {
            titles,
            curve: LevelCurve::new(),
        }
    }

    pub fn titles(&self) -> &TitleTable {
        &self.titles
    }

    pub fn curve(&self) -> &LevelCurve {
        &self.curve
    }

    pub fn level_for_xp(&self, total_xp: u64) -> u32 {
        self.curve.level_for_xp(total_xp)
    }

    pub fn derive(&self, progress: &UserProgress) -> DerivedProgression {
        let breakdown = xp_breakdown(progress);
        let total_xp = breakdown.total();
        let level = self.level_for_xp(total_xp);
        let within = level_progress(level, total_xp);
        let tier = self.titles.resolve(level);

        debug!(total_xp, level, title = %tier.title, "derived progression");

        DerivedProgression {
            total_xp,
            level,
            level_title: tier.title.clone(),
            visual_tier: tier.visual.clone(),
            xp_for_current_level: within.xp_for_current_level,
            xp_for_next_level: within.xp_for_next_level,
            xp_to_next_level: within.xp_to_next_level,
            level_progress_percent: within.level_progress_percent,
            points: progress.points,
            breakdown,
        }
    }

    /// Levels gained going from `before` to `after`, lowest first
    pub fn level_ups(&self, before: &UserProgress, after: &UserProgress) -> Vec<LevelUp> {
        let old_level = self.derive(before).level;
        let new_level = self.derive(after).level;

        (old_level.saturating_add(1)..=new_level)
            .map(|level| {
                let title = self.titles.title(level).to_string();
                let new_title = self.titles.title(level - 1) != title;
                LevelUp {
                    level,
                    title,
                    new_title,
                }
            })
            .collect()
    }
}
