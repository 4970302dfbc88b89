//! Achievement identifiers and the tier tables that turn them into bonus XP.
//!
//! Achievements arrive from the backend as plain strings. Recognized ones map
//! to [`KnownAchievement`]; everything else is kept verbatim as
//! [`AchievementId::Other`] so it still counts toward the achievement total.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Achievements the XP tier tables know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KnownAchievement {
    FirstShare,
    Sharer10,
    Sharer25,
    Sharer50,
    FirstArticle,
    Creator5,
    Creator10,
    Creator25,
    Completionist,
}

impl KnownAchievement {
    pub const ALL: [KnownAchievement; 9] = [
        Self::FirstShare,
        Self::Sharer10,
        Self::Sharer25,
        Self::Sharer50,
        Self::FirstArticle,
        Self::Creator5,
        Self::Creator10,
        Self::Creator25,
        Self::Completionist,
    ];

    /// Wire identifier as stored by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstShare => "first-share",
            Self::Sharer10 => "sharer-10",
            Self::Sharer25 => "sharer-25",
            Self::Sharer50 => "sharer-50",
            Self::FirstArticle => "first-article",
            Self::Creator5 => "creator-5",
            Self::Creator10 => "creator-10",
            Self::Creator25 => "creator-25",
            Self::Completionist => "completionist",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == id)
    }
}

/// An achievement identifier, recognized or not
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AchievementId {
    Known(KnownAchievement),
    Other(String),
}

impl AchievementId {
    pub fn parse(id: &str) -> Self {
        match KnownAchievement::from_id(id) {
            Some(known) => Self::Known(known),
            None => Self::Other(id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(known) => known.as_str(),
            Self::Other(id) => id,
        }
    }

    pub fn known(&self) -> Option<KnownAchievement> {
        match self {
            Self::Known(known) => Some(*known),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for AchievementId {
    fn from(id: String) -> Self {
        match KnownAchievement::from_id(&id) {
            Some(known) => Self::Known(known),
            None => Self::Other(id),
        }
    }
}

impl From<&str> for AchievementId {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl From<KnownAchievement> for AchievementId {
    fn from(known: KnownAchievement) -> Self {
        Self::Known(known)
    }
}

impl From<AchievementId> for String {
    fn from(id: AchievementId) -> Self {
        match id {
            AchievementId::Known(known) => known.as_str().to_string(),
            AchievementId::Other(id) => id,
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// XP per share milestone
pub const SHARE_XP_PER_MILESTONE: u64 = 20;

/// XP per creation milestone
pub const CREATION_XP_PER_MILESTONE: u64 = 150;

/// Share tiers, highest first: (achievement, milestone count)
pub const SHARE_TIERS: &[(KnownAchievement, u64)] = &[
    (KnownAchievement::Sharer50, 50),
    (KnownAchievement::Sharer25, 25),
    (KnownAchievement::Sharer10, 10),
    (KnownAchievement::FirstShare, 1),
];

/// Creation tiers, highest first: (achievement, milestone count)
pub const CREATION_TIERS: &[(KnownAchievement, u64)] = &[
    (KnownAchievement::Creator25, 25),
    (KnownAchievement::Creator10, 10),
    (KnownAchievement::Creator5, 5),
    (KnownAchievement::FirstArticle, 1),
];

/// Achievement-volume bonus, highest first: (minimum count, bonus XP)
pub const VOLUME_TIERS: &[(usize, u64)] = &[(30, 1000), (20, 500), (10, 200)];

/// Milestone count of the highest tier present, 0 when none matches.
///
/// Tiers are not additive: holding `sharer-10` and `sharer-50` yields 50.
pub fn highest_milestone<'a, I>(tiers: &[(KnownAchievement, u64)], held: I) -> u64
where
    I: IntoIterator<Item = &'a AchievementId> + Clone,
{
    for &(tier, milestone) in tiers {
        if held.clone().into_iter().any(|id| id.known() == Some(tier)) {
            return milestone;
        }
    }
    0
}

/// Volume bonus for holding `count` achievements
pub fn volume_bonus(count: usize) -> u64 {
    VOLUME_TIERS
        .iter()
        .find(|&&(min, _)| count >= min)
        .map(|&(_, bonus)| bonus)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(
            AchievementId::parse("sharer-25"),
            AchievementId::Known(KnownAchievement::Sharer25)
        );
        assert_eq!(
            AchievementId::parse("first-read"),
            AchievementId::Other("first-read".to_string())
        );
    }

    #[test]
    fn test_wire_ids_round_trip() {
        for known in KnownAchievement::ALL {
            assert_eq!(KnownAchievement::from_id(known.as_str()), Some(known));
        }
    }

    #[test]
    fn test_serde_as_plain_strings() {
        let ids: Vec<AchievementId> =
            serde_json::from_str(r#"["completionist", "night-owl"]"#).unwrap();
        assert_eq!(ids[0].known(), Some(KnownAchievement::Completionist));
        assert_eq!(ids[1].as_str(), "night-owl");

        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"["completionist","night-owl"]"#);
    }

    #[test]
    fn test_highest_milestone_not_additive() {
        let held = vec![
            AchievementId::from("sharer-10"),
            AchievementId::from("sharer-50"),
            AchievementId::from("first-share"),
        ];
        assert_eq!(highest_milestone(SHARE_TIERS, &held), 50);
        assert_eq!(highest_milestone(CREATION_TIERS, &held), 0);
    }

    #[test]
    fn test_highest_milestone_ignores_unknown() {
        let held = vec![AchievementId::from("creator-100")];
        assert_eq!(highest_milestone(CREATION_TIERS, &held), 0);
    }

    #[test]
    fn test_volume_bonus_bands() {
        assert_eq!(volume_bonus(0), 0);
        assert_eq!(volume_bonus(9), 0);
        assert_eq!(volume_bonus(10), 200);
        assert_eq!(volume_bonus(19), 200);
        assert_eq!(volume_bonus(20), 500);
        assert_eq!(volume_bonus(30), 1000);
        assert_eq!(volume_bonus(500), 1000);
    }
}
