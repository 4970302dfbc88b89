//! Subcommand implementations.

use crate::display;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use dewii_shared::streaks::parse_dates;
use dewii_shared::{calculate_streaks, ProgressionEngine, UserProgress};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

/// Read a file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parse a `UserProgress` JSON document
pub fn load_progress(path: Option<&Path>) -> Result<UserProgress> {
    let raw = read_input(path)?;
    let progress: UserProgress =
        serde_json::from_str(&raw).context("Input is not a UserProgress JSON object")?;
    debug!(
        articles = progress.total_articles_read,
        achievements = progress.achievement_count(),
        "loaded progress"
    );
    Ok(progress)
}

pub fn progression(
    engine: &ProgressionEngine,
    path: Option<&Path>,
    json: bool,
    color: bool,
) -> Result<String> {
    let progress = load_progress(path)?;
    let derived = engine.derive(&progress);
    info!(total_xp = derived.total_xp, level = derived.level, "progression computed");

    if json {
        Ok(serde_json::to_string_pretty(&derived)?)
    } else {
        Ok(display::render_progression(&derived, color))
    }
}

pub fn levels(engine: &ProgressionEngine, up_to: u32, color: bool) -> String {
    let rows = engine.curve().table(up_to);
    display::render_levels(&rows, engine.titles(), color)
}

pub fn titles(engine: &ProgressionEngine, color: bool) -> String {
    display::render_titles(engine.titles(), color)
}

/// Level-ups between two progress snapshots
pub fn diff(
    engine: &ProgressionEngine,
    before: &Path,
    after: &Path,
    json: bool,
    color: bool,
) -> Result<String> {
    let before = load_progress(Some(before))?;
    let after = load_progress(Some(after))?;
    let ups = engine.level_ups(&before, &after);

    if json {
        return Ok(serde_json::to_string_pretty(&ups)?);
    }
    if ups.is_empty() {
        return Ok("No level change".to_string());
    }
    Ok(ups
        .iter()
        .map(|up| display::render_level_up(up, color))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Streak statistics from a JSON array of `YYYY-MM-DD` days
pub fn streaks(path: Option<&Path>, today: NaiveDate, json: bool, color: bool) -> Result<String> {
    let raw = read_input(path)?;
    let days: Vec<String> =
        serde_json::from_str(&raw).context("Input is not a JSON array of dates")?;
    let dates = parse_dates(&days)?;
    let stats = calculate_streaks(&dates, today);

    if json {
        Ok(serde_json::to_string_pretty(&stats)?)
    } else {
        Ok(display::render_streaks(&stats, color))
    }
}
