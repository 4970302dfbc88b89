//! Level titles and visual tiers.
//!
//! A title table is an ordered list of `(min_level, title, visual tier)`
//! rows, evaluated from the highest `min_level` down; the first row the level
//! reaches wins. Every table ends in a catch-all row at level 1.

use crate::error::{DewiiError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Canonical bands: (min level, title, icon, palette)
pub const DEFAULT_TITLE_BANDS: &[(u32, &str, &str, &str)] = &[
    (20, "Legendary Scholar", "crown", "amber"),
    (15, "Master Reader", "trophy", "violet"),
    (10, "Expert Explorer", "compass", "sky"),
    (5, "Avid Learner", "book", "emerald"),
    (1, "Knowledge Seeker", "sprout", "slate"),
];

/// Cosmetic tier: which badge icon and color scheme to render
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualTier {
    pub icon: String,
    pub palette: String,
}

impl VisualTier {
    pub fn new(icon: &str, palette: &str) -> Self {
        Self {
            icon: icon.to_string(),
            palette: palette.to_string(),
        }
    }
}

impl fmt::Display for VisualTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.icon, self.palette)
    }
}

/// One row of a title table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleTier {
    pub min_level: u32,
    pub title: String,
    #[serde(flatten)]
    pub visual: VisualTier,
}

impl TitleTier {
    pub fn new(min_level: u32, title: &str, icon: &str, palette: &str) -> Self {
        Self {
            min_level,
            title: title.to_string(),
            visual: VisualTier::new(icon, palette),
        }
    }
}

/// Validated title table, sorted by descending `min_level`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTable {
    tiers: Vec<TitleTier>,
}

impl TitleTable {
    /// Validate and sort a custom table
    pub fn new(mut tiers: Vec<TitleTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(DewiiError::InvalidTitleTable("table is empty".to_string()));
        }
        if let Some(tier) = tiers.iter().find(|t| t.min_level == 0) {
            return Err(DewiiError::InvalidTitleTable(format!(
                "'{}' has min_level 0, levels start at 1",
                tier.title
            )));
        }
        let mut seen = HashSet::new();
        for tier in &tiers {
            if !seen.insert(tier.min_level) {
                return Err(DewiiError::InvalidTitleTable(format!(
                    "duplicate min_level {}",
                    tier.min_level
                )));
            }
        }
        if !seen.contains(&1) {
            return Err(DewiiError::InvalidTitleTable(
                "no catch-all tier at min_level 1".to_string(),
            ));
        }

        tiers.sort_by(|a, b| b.min_level.cmp(&a.min_level));
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[TitleTier] {
        &self.tiers
    }

    /// Tier for `level`; levels below 1 resolve like level 1
    pub fn resolve(&self, level: u32) -> &TitleTier {
        let level = level.max(1);
        self.tiers
            .iter()
            .find(|t| level >= t.min_level)
            .unwrap_or(&self.tiers[self.tiers.len() - 1])
    }

    pub fn title(&self, level: u32) -> &str {
        &self.resolve(level).title
    }

    pub fn visual_tier(&self, level: u32) -> &VisualTier {
        &self.resolve(level).visual
    }
}

impl Default for TitleTable {
    fn default() -> Self {
        let tiers = DEFAULT_TITLE_BANDS
            .iter()
            .map(|&(min, title, icon, palette)| TitleTier::new(min, title, icon, palette))
            .collect();
        Self { tiers }
    }
}

/// Canonical band for `level`; the last row is the catch-all
fn default_band(level: u32) -> (u32, &'static str, &'static str, &'static str) {
    let catch_all = DEFAULT_TITLE_BANDS[DEFAULT_TITLE_BANDS.len() - 1];
    DEFAULT_TITLE_BANDS
        .iter()
        .copied()
        .find(|&(min, _, _, _)| level >= min)
        .unwrap_or(catch_all)
}

/// Title from the canonical table
pub fn level_title(level: u32) -> &'static str {
    default_band(level).1
}

/// Visual tier from the canonical table
pub fn level_visual_tier(level: u32) -> VisualTier {
    let (_, _, icon, palette) = default_band(level);
    VisualTier::new(icon, palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        assert_eq!(level_title(0), "Knowledge Seeker");
        assert_eq!(level_title(1), "Knowledge Seeker");
        assert_eq!(level_title(4), "Knowledge Seeker");
        assert_eq!(level_title(5), "Avid Learner");
        assert_eq!(level_title(9), "Avid Learner");
        assert_eq!(level_title(10), "Expert Explorer");
        assert_eq!(level_title(15), "Master Reader");
        assert_eq!(level_title(19), "Master Reader");
        assert_eq!(level_title(20), "Legendary Scholar");
        assert_eq!(level_title(99), "Legendary Scholar");
    }

    #[test]
    fn test_table_agrees_with_free_functions() {
        let table = TitleTable::default();
        for level in 0..60 {
            assert_eq!(table.title(level), level_title(level));
            assert_eq!(table.visual_tier(level), &level_visual_tier(level));
        }
        assert_eq!(level_visual_tier(20).to_string(), "crown/amber");
    }

    #[test]
    fn test_level_zero_falls_back_to_catch_all_row() {
        let (_, title, icon, palette) = DEFAULT_TITLE_BANDS[DEFAULT_TITLE_BANDS.len() - 1];
        assert_eq!(level_title(0), title);
        assert_eq!(level_visual_tier(0), VisualTier::new(icon, palette));
    }

    #[test]
    fn test_custom_table_is_sorted() {
        let table = TitleTable::new(vec![
            TitleTier::new(1, "Reader", "dot", "gray"),
            TitleTier::new(50, "Sage", "star", "gold"),
            TitleTier::new(25, "Scholar", "book", "blue"),
        ])
        .unwrap();
        let mins: Vec<u32> = table.tiers().iter().map(|t| t.min_level).collect();
        assert_eq!(mins, vec![50, 25, 1]);
        assert_eq!(table.title(24), "Reader");
        assert_eq!(table.title(25), "Scholar");
        assert_eq!(table.title(70), "Sage");
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(
            TitleTable::new(vec![]),
            Err(DewiiError::InvalidTitleTable(_))
        ));
    }

    #[test]
    fn test_rejects_missing_catch_all() {
        let err = TitleTable::new(vec![TitleTier::new(5, "Avid", "book", "green")]).unwrap_err();
        assert!(err.to_string().contains("catch-all"));
    }

    #[test]
    fn test_rejects_duplicates_and_zero() {
        let dup = TitleTable::new(vec![
            TitleTier::new(1, "A", "a", "a"),
            TitleTier::new(1, "B", "b", "b"),
        ]);
        assert!(dup.unwrap_err().to_string().contains("duplicate"));

        let zero = TitleTable::new(vec![
            TitleTier::new(0, "Zero", "z", "z"),
            TitleTier::new(1, "One", "o", "o"),
        ]);
        assert!(zero.is_err());
    }
}
