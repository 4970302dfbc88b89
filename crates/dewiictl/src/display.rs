//! Terminal rendering for dewiictl.
//!
//! ASCII only. Every renderer returns a `String` so callers decide where it
//! goes; `color` switches ANSI styling on or off.

use dewii_shared::{DerivedProgression, LevelUp, StreakStats, TitleTable};
use owo_colors::OwoColorize;

/// Width of the level progress bar
pub const BAR_WIDTH: usize = 30;

pub const HR: &str = "------------------------------------------------------------";

fn bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

fn accent(text: &str, color: bool) -> String {
    if color {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// `[=========---------]` for a 0-100 percentage
pub fn progress_bar(percent: f64, width: usize, color: bool) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let full = "=".repeat(filled);
    let empty = "-".repeat(width - filled);
    if color {
        format!("[{}{}]", full.green(), empty.dimmed())
    } else {
        format!("[{}{}]", full, empty)
    }
}

/// Profile card for a derived progression
pub fn render_progression(derived: &DerivedProgression, color: bool) -> String {
    let mut out = String::new();
    let level_line = format!("Level {}  {}", derived.level, derived.level_title);

    out.push_str(&bold(&level_line, color));
    out.push('\n');
    out.push_str(&dim(&format!("  tier {}", derived.visual_tier), color));
    out.push('\n');
    out.push_str(&format!(
        "  {} {:.0}%\n",
        progress_bar(derived.level_progress_percent, BAR_WIDTH, color),
        derived.level_progress_percent
    ));
    out.push_str(&format!(
        "  {} XP  ({} to level {}, next at {})\n",
        accent(&derived.total_xp.to_string(), color),
        derived.xp_to_next_level,
        derived.level.saturating_add(1),
        derived.xp_for_next_level
    ));
    out.push_str(&format!("  {} points\n", derived.points));
    out.push('\n');

    out.push_str(&bold("XP breakdown", color));
    out.push('\n');
    for (label, xp) in derived.breakdown.entries() {
        if xp > 0 {
            out.push_str(&format!("  {:14} {:>10}\n", label, xp));
        }
    }
    out.push_str(&dim(HR, color));
    out.push('\n');
    out.push_str(&format!("  {:14} {:>10}\n", "total", derived.total_xp));
    out
}

/// Threshold table rows `(level, cumulative xp, step)`
pub fn render_levels(rows: &[(u32, u64, u64)], titles: &TitleTable, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold(
        &format!("{:>5}  {:>12}  {:>10}  {}", "level", "total xp", "step", "title"),
        color,
    ));
    out.push('\n');
    for &(level, total, step) in rows {
        out.push_str(&format!(
            "{:>5}  {:>12}  {:>10}  {}\n",
            level,
            total,
            step,
            titles.title(level)
        ));
    }
    out
}

pub fn render_titles(titles: &TitleTable, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold(&format!("{:>9}  {:24} {}", "min level", "title", "tier"), color));
    out.push('\n');
    for tier in titles.tiers() {
        out.push_str(&format!(
            "{:>9}  {:24} {}\n",
            tier.min_level,
            tier.title,
            accent(&tier.visual.to_string(), color)
        ));
    }
    out
}

pub fn render_streaks(stats: &StreakStats, color: bool) -> String {
    format!(
        "{}\n  current {:>5} days\n  longest {:>5} days\n  active  {:>5} days\n",
        bold("Reading streaks", color),
        stats.current_streak,
        stats.longest_streak,
        stats.active_days
    )
}

pub fn render_level_up(up: &LevelUp, color: bool) -> String {
    let marker = if up.new_title { "[NEW TITLE]" } else { "[LEVEL UP]" };
    format!("{} Level {} - {}", accent(marker, color), up.level, up.title)
}
