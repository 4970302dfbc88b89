//! Level System
//!
//! Quadratic curve: going from level L-1 to level L costs `50 * L^2` XP.
//! Level 1 is free, so the cumulative XP to reach level L is
//! `sum(50 * k^2 for k in 2..=L)`:
//!
//! - Level 2: 200 XP
//! - Level 3: 650 XP
//! - Level 4: 1,450 XP
//! - Level 10: 19,200 XP
//! - Level 20: 143,450 XP

use serde::{Deserialize, Serialize};

/// XP multiplier on the squared level number
pub const XP_PER_LEVEL_SQUARED: u64 = 50;

/// Levels kept in a [`LevelCurve`] lookup table
pub const CACHED_LEVELS: u32 = 256;

/// XP needed to go from `level - 1` to `level`
pub fn level_step(level: u32) -> u64 {
    let l = level as u64;
    l.saturating_mul(l).saturating_mul(XP_PER_LEVEL_SQUARED)
}

/// Cumulative XP required to reach `level` (0 for level 1 and below)
pub fn xp_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let l = level as u128;
    let squares = l * (l + 1) * (2 * l + 1) / 6 - 1;
    u64::try_from(squares * XP_PER_LEVEL_SQUARED as u128).unwrap_or(u64::MAX)
}

/// Level reached with `total_xp`. Always at least 1.
pub fn compute_level(total_xp: u64) -> u32 {
    climb_from(1, 0, total_xp)
}

/// Walk the curve upward from a known (level, threshold) pair
fn climb_from(mut level: u32, mut xp_needed: u64, total_xp: u64) -> u32 {
    loop {
        let next = level.saturating_add(1);
        if next == level {
            break;
        }
        match xp_needed.checked_add(level_step(next)) {
            Some(threshold) if threshold <= total_xp => {
                level = next;
                xp_needed = threshold;
            }
            _ => break,
        }
    }
    level.max(1)
}

/// Cached threshold table answering level lookups by binary search.
///
/// Past the cached range it falls back to walking the curve, so results
/// always match [`compute_level`].
#[derive(Debug, Clone)]
pub struct LevelCurve {
    /// `thresholds[i]` is the XP needed for level `i + 1`
    thresholds: Vec<u64>,
}

impl LevelCurve {
    pub fn new() -> Self {
        Self::with_cached_levels(CACHED_LEVELS)
    }

    pub fn with_cached_levels(levels: u32) -> Self {
        let levels = levels.max(1);
        let thresholds = (1..=levels).map(xp_for_level).collect();
        Self { thresholds }
    }

    pub fn cached_levels(&self) -> u32 {
        self.thresholds.len() as u32
    }

    /// Cumulative XP for `level`, served from the table when cached
    pub fn xp_for_level(&self, level: u32) -> u64 {
        match level.checked_sub(1) {
            Some(i) => self
                .thresholds
                .get(i as usize)
                .copied()
                .unwrap_or_else(|| xp_for_level(level)),
            None => 0,
        }
    }

    pub fn level_for_xp(&self, total_xp: u64) -> u32 {
        let last = self.thresholds.len() as u32;
        let top = self.thresholds[self.thresholds.len() - 1];
        if total_xp < top {
            // thresholds[0] == 0, so at least one entry always matches
            return self.thresholds.partition_point(|&t| t <= total_xp) as u32;
        }
        climb_from(last, top, total_xp)
    }

    /// Threshold rows `(level, cumulative xp, step from previous level)`
    pub fn table(&self, up_to: u32) -> Vec<(u32, u64, u64)> {
        (1..=up_to.max(1))
            .map(|level| {
                let step = if level == 1 { 0 } else { level_step(level) };
                (level, self.xp_for_level(level), step)
            })
            .collect()
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of `total_xp` inside `level`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub xp_for_current_level: u64,
    pub xp_for_next_level: u64,
    pub xp_to_next_level: u64,
    /// Always within 0.0..=100.0
    pub level_progress_percent: f64,
}

impl LevelProgress {
    /// Whole-number percentage for progress bars
    pub fn percent_rounded(&self) -> u8 {
        self.level_progress_percent.round().clamp(0.0, 100.0) as u8
    }
}

/// Progress within `level` for `total_xp`.
///
/// The percentage is measured against the step to the next level and
/// clamped, so a stale `level` never yields a value outside 0..=100.
pub fn level_progress(level: u32, total_xp: u64) -> LevelProgress {
    let level = level.max(1);
    let step = level_step(level.saturating_add(1));
    let xp_for_current_level = xp_for_level(level);
    let xp_for_next_level = xp_for_current_level.saturating_add(step);

    let gained = total_xp as f64 - xp_for_current_level as f64;
    let percent = (gained / step as f64 * 100.0).clamp(0.0, 100.0);

    LevelProgress {
        xp_for_current_level,
        xp_for_next_level,
        xp_to_next_level: xp_for_next_level.saturating_sub(total_xp),
        level_progress_percent: percent,
    }
}
