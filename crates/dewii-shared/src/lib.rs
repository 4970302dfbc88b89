//! Shared types for DEWII: the reader progression engine.
//!
//! XP, levels and titles are derived from a `UserProgress` record by one
//! pure implementation that every client shares.

pub mod achievements;
pub mod config;
pub mod error;
pub mod levels;
pub mod progress;
pub mod progression;
pub mod streaks;
pub mod titles;
pub mod xp;

pub use achievements::{AchievementId, KnownAchievement};
pub use config::DewiiConfig;
pub use error::DewiiError;
pub use levels::{compute_level, level_progress, xp_for_level, LevelCurve, LevelProgress};
pub use progress::UserProgress;
pub use progression::{DerivedProgression, LevelUp, ProgressionEngine};
pub use streaks::{calculate_streaks, StreakStats};
pub use titles::{level_title, level_visual_tier, TitleTable, TitleTier, VisualTier};
pub use xp::{compute_xp, xp_breakdown, XpBreakdown};

/// Crate version, shown by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
