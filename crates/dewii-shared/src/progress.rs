//! UserProgress: the backend record the progression engine reads.
//!
//! Deserialization is lenient. Missing, null, negative, fractional, numeric
//! string or otherwise mistyped counters become non-negative integers instead
//! of errors, and non-string achievement entries are dropped, so a partial or
//! sloppy record still produces a (minimal) progression.

use crate::achievements::AchievementId;
use crate::streaks::StreakStats;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Progress counters for one reader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Lifetime count of distinct articles marked read
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_articles_read: u64,
    /// Unlocked achievements; membership is all that matters
    #[serde(default, deserialize_with = "lenient_achievements")]
    pub achievements: BTreeSet<AchievementId>,
    /// Consecutive active days as of now
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_streak: u64,
    /// Best streak ever observed
    #[serde(default, deserialize_with = "lenient_u64")]
    pub longest_streak: u64,
    /// Spendable shop balance. Not XP; passed through untouched.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub points: u64,
}

impl UserProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles_read(mut self, count: u64) -> Self {
        self.total_articles_read = count;
        self
    }

    pub fn with_achievement(mut self, id: impl Into<AchievementId>) -> Self {
        self.achievements.insert(id.into());
        self
    }

    pub fn with_achievements<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AchievementId>,
    {
        self.achievements.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_streak(mut self, current: u64, longest: u64) -> Self {
        self.current_streak = current;
        self.longest_streak = longest;
        self
    }

    /// Fill the streak counters from computed activity streaks
    pub fn with_streaks(self, streaks: &StreakStats) -> Self {
        self.with_streak(streaks.current_streak as u64, streaks.longest_streak as u64)
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.len()
    }

    pub fn has(&self, id: &AchievementId) -> bool {
        self.achievements.contains(id)
    }
}

struct LenientU64;

impl<'de> Visitor<'de> for LenientU64 {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(v.max(0) as u64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        if v.is_finite() && v > 0.0 {
            Ok(v as u64)
        } else {
            Ok(0)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        let v = v.trim();
        if let Ok(n) = v.parse::<u64>() {
            return Ok(n);
        }
        match v.parse::<f64>() {
            Ok(f) => self.visit_f64(f),
            Err(_) => Ok(0),
        }
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<u64, D::Error> {
        d.deserialize_any(LenientU64)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<u64, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(0)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<u64, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(0)
    }
}

fn lenient_u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    d.deserialize_any(LenientU64)
}

/// One `achievements` entry: strings are kept, anything else is dropped
struct MaybeAchievement(Option<AchievementId>);

impl<'de> Deserialize<'de> for MaybeAchievement {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(d)?;
        Ok(match value {
            serde_json::Value::String(id) => Self(Some(AchievementId::from(id))),
            _ => Self(None),
        })
    }
}

/// The whole `achievements` field: a list, or nothing usable
struct LenientAchievements;

impl<'de> Visitor<'de> for LenientAchievements {
    type Value = BTreeSet<AchievementId>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of achievement ids")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut ids = BTreeSet::new();
        while let Some(MaybeAchievement(id)) = seq.next_element()? {
            ids.extend(id);
        }
        Ok(ids)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(BTreeSet::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(LenientAchievements)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(BTreeSet::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(BTreeSet::new())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(BTreeSet::new())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(BTreeSet::new())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(BTreeSet::new())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(BTreeSet::new())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(BTreeSet::new())
    }
}

fn lenient_achievements<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<BTreeSet<AchievementId>, D::Error> {
    d.deserialize_any(LenientAchievements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::KnownAchievement;

    #[test]
    fn test_empty_object_is_all_zero() {
        let progress: UserProgress = serde_json::from_str("{}").unwrap();
        assert_eq!(progress, UserProgress::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "totalArticlesRead": 12,
            "achievements": ["first-share", "first-share", "mystery"],
            "currentStreak": 4,
            "longestStreak": 9,
            "points": 250
        }"#;
        let progress: UserProgress = serde_json::from_str(json).unwrap();
        assert_eq!(progress.total_articles_read, 12);
        assert_eq!(progress.achievement_count(), 2);
        assert!(progress.has(&KnownAchievement::FirstShare.into()));
        assert_eq!(progress.current_streak, 4);
        assert_eq!(progress.longest_streak, 9);
        assert_eq!(progress.points, 250);
    }

    #[test]
    fn test_negative_null_and_fractional_are_clamped() {
        let json = r#"{
            "totalArticlesRead": -5,
            "achievements": null,
            "currentStreak": null,
            "longestStreak": 2.7,
            "points": -1.5
        }"#;
        let progress: UserProgress = serde_json::from_str(json).unwrap();
        assert_eq!(progress.total_articles_read, 0);
        assert!(progress.achievements.is_empty());
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.longest_streak, 2);
        assert_eq!(progress.points, 0);
    }

    #[test]
    fn test_mistyped_fields_default_to_zero() {
        let json = r#"{
            "totalArticlesRead": "12",
            "achievements": ["first-share", null, 3, {"id": "x"}, ["creator-5"]],
            "currentStreak": true,
            "longestStreak": " 7.9 ",
            "points": {"balance": 40}
        }"#;
        let progress: UserProgress = serde_json::from_str(json).unwrap();
        assert_eq!(progress.total_articles_read, 12);
        assert_eq!(progress.achievement_count(), 1);
        assert!(progress.has(&KnownAchievement::FirstShare.into()));
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.longest_streak, 7);
        assert_eq!(progress.points, 0);

        let json = r#"{
            "totalArticlesRead": "lots",
            "currentStreak": [1, 2],
            "achievements": "first-share"
        }"#;
        let progress: UserProgress = serde_json::from_str(json).unwrap();
        assert_eq!(progress, UserProgress::default());
    }

    #[test]
    fn test_with_streaks() {
        let streaks = StreakStats {
            current_streak: 2,
            longest_streak: 6,
            active_days: 11,
        };
        let progress = UserProgress::new().with_streaks(&streaks);
        assert_eq!(progress.current_streak, 2);
        assert_eq!(progress.longest_streak, 6);
    }

    #[test]
    fn test_builder() {
        let progress = UserProgress::new()
            .with_articles_read(3)
            .with_achievements(["creator-5", "sharer-10"])
            .with_streak(2, 5)
            .with_points(40);
        assert_eq!(progress.total_articles_read, 3);
        assert_eq!(progress.achievement_count(), 2);
        assert_eq!(progress.longest_streak, 5);
        assert_eq!(progress.points, 40);
    }
}
