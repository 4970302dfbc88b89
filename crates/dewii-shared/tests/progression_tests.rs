//! Scenario tests for the progression engine.

use dewii_shared::{
    compute_level, compute_xp, level_title, xp_breakdown, ProgressionEngine, UserProgress,
};

fn from_json(json: &str) -> UserProgress {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_scenario_empty_reader() {
    let progress = from_json(
        r#"{"totalArticlesRead": 0, "achievements": [], "currentStreak": 0, "longestStreak": 0}"#,
    );
    let total = compute_xp(&progress);
    assert_eq!(total, 0);
    assert_eq!(compute_level(total), 1);
    assert_eq!(level_title(compute_level(total)), "Knowledge Seeker");
}

#[test]
fn test_scenario_casual_reader() {
    let progress = from_json(
        r#"{"totalArticlesRead": 10, "achievements": ["first-read"], "currentStreak": 3, "longestStreak": 3}"#,
    );
    assert_eq!(compute_xp(&progress), 690);
    assert_eq!(compute_level(690), 3);

    let derived = ProgressionEngine::default().derive(&progress);
    assert_eq!(derived.total_xp, 690);
    assert_eq!(derived.level, 3);
    assert_eq!(derived.breakdown.consistency, 0);
}

#[test]
fn test_scenario_completionist_only() {
    let progress = from_json(r#"{"achievements": ["completionist"]}"#);
    let xp = xp_breakdown(&progress);
    assert_eq!(xp.reading, 0);
    assert_eq!(xp.achievements, 100);
    assert_eq!(xp.volume, 0);
    assert_eq!(xp.completionist, 5000);
    assert_eq!(compute_xp(&progress), 5100);
}

#[test]
fn test_share_tiers_do_not_stack() {
    let progress = UserProgress::new().with_achievements(["sharer-10", "sharer-50"]);
    assert_eq!(xp_breakdown(&progress).sharing, 1000);
    // 2 achievements x 100 + sharer-50
    assert_eq!(compute_xp(&progress), 1200);
}

#[test]
fn test_power_reader() {
    let progress = UserProgress::new()
        .with_articles_read(120)
        .with_achievements([
            "first-share",
            "sharer-10",
            "sharer-25",
            "first-article",
            "creator-5",
            "creator-10",
            "daily-reader",
            "night-owl",
            "early-bird",
            "curious-mind",
        ])
        .with_streak(14, 14);

    let xp = xp_breakdown(&progress);
    assert_eq!(xp.reading, 6000);
    assert_eq!(xp.achievements, 1000);
    assert_eq!(xp.streak, 420);
    assert_eq!(xp.sharing, 500);
    assert_eq!(xp.creation, 1500);
    assert_eq!(xp.consistency, 140);
    assert_eq!(xp.volume, 200);
    assert_eq!(xp.completionist, 0);
    assert_eq!(xp.total(), 9760);

    // Level 7 starts at 6950, level 8 at 10150
    let derived = ProgressionEngine::default().derive(&progress);
    assert_eq!(derived.level, 7);
    assert_eq!(derived.level_title, "Avid Learner");
    assert_eq!(derived.xp_for_current_level, 6950);
    assert_eq!(derived.xp_for_next_level, 10150);
    assert_eq!(derived.xp_to_next_level, 390);
}

#[test]
fn test_unknown_achievements_only_add_flat_xp() {
    let base = UserProgress::new().with_articles_read(5);
    let with_unknown = base.clone().with_achievements(["alpha", "beta"]);
    assert_eq!(compute_xp(&with_unknown) - compute_xp(&base), 200);
}

#[test]
fn test_derive_is_idempotent() {
    let engine = ProgressionEngine::default();
    let progress = UserProgress::new()
        .with_articles_read(42)
        .with_achievements(["creator-25", "sharer-25"])
        .with_streak(8, 8)
        .with_points(99);
    assert_eq!(engine.derive(&progress), engine.derive(&progress));
    assert_eq!(compute_xp(&progress), compute_xp(&progress));
}

#[test]
fn test_derived_json_round_trip_fields() {
    let progress = from_json(r#"{"totalArticlesRead": 4, "points": 7}"#);
    let derived = ProgressionEngine::default().derive(&progress);
    let json = serde_json::to_value(&derived).unwrap();
    assert_eq!(json["totalXp"], 200);
    assert_eq!(json["level"], 2);
    assert_eq!(json["points"], 7);
    assert_eq!(json["xpForNextLevel"], 650);
}
