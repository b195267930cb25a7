//! Dashboard and achievements commands

use anyhow::{Result, bail};

use ecotrack::Category;
use ecotrack::stats::{TimeRange, today};

use super::log::print_gamification;
use super::{AppContext, Tracker};

const BAR_WIDTH: usize = 30;

/// Open the tracker under the lock and pick up any achievements earned since
/// the last run
fn open_refreshed(ctx: &AppContext) -> Result<Tracker> {
    let _lock = ctx.lock()?;
    let mut tracker = ctx.open_tracker()?;
    let unlocked = tracker.refresh(today())?;
    if !unlocked.is_empty() {
        print_gamification(&unlocked);
        println!();
    }
    Ok(tracker)
}

/// Show totals, per-category breakdown, impact, streak and level
pub fn stats_command(ctx: &AppContext, range: &str) -> Result<()> {
    let Some(range) = TimeRange::from_str(range) else {
        bail!("Unknown range: {} (expected 7d, 30d, 90d or all)", range);
    };

    let tracker = open_refreshed(ctx)?;
    let today = today();
    let stats = tracker.stats_for(range, today);

    println!("Waste stats - {}\n", range.label());
    println!("  Total waste:     {:.2} kg", stats.total_waste);
    println!("  Recycled:        {:.2} kg", stats.total_recycled);
    println!("  Recycling rate:  {:.1}%\n", stats.recycling_rate);

    let max = stats.max_category_kg();
    for category in Category::ALL {
        let kg = stats.category_kg(category);
        let width = if max > 0.0 {
            ((kg / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!("  {:<11} {:>8.2} kg  {}", category.label(), kg, "#".repeat(width));
    }

    println!("\nEnvironmental impact");
    println!("  CO2 saved:       {:.1} kg", stats.impact.co2_saved);
    println!("  Energy saved:    {:.1} kWh", stats.impact.energy_saved);
    println!("  Water saved:     {:.0} L", stats.impact.water_saved);
    println!("  Trees saved:     {:.2}", stats.impact.trees_saved);

    let progress = tracker.level_progress();
    println!(
        "\nStreak: {} day(s) (best {})",
        tracker.streak(today),
        tracker.longest_streak(today)
    );
    println!(
        "Level {} - {} points ({} to level {})",
        progress.level,
        progress.points,
        progress.points_to_next,
        progress.level + 1
    );

    Ok(())
}

/// Show every achievement with its earned flag and progress
pub fn achievements_command(ctx: &AppContext) -> Result<()> {
    let tracker = open_refreshed(ctx)?;
    let board = tracker.achievement_board(today());
    let earned = board.iter().filter(|s| s.earned).count();

    println!("Achievements ({}/{}):\n", earned, board.len());
    for status in &board {
        let mark = if status.earned { "x" } else { " " };
        println!(
            "  [{}] {} {} - {}",
            mark, status.achievement.icon, status.achievement.name, status.achievement.description
        );
        if !status.earned {
            println!(
                "        {:.0} / {:.0} ({:.0}%)",
                status.current,
                status.target,
                status.percent()
            );
        }
    }

    Ok(())
}
