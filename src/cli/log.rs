//! Log and delete commands

use anyhow::{Context, Result};

use ecotrack::WasteInput;
use ecotrack::stats::achievements::GamificationEvent;
use ecotrack::stats::today;

use super::AppContext;

/// Validate and record a waste entry
pub fn log_command(ctx: &AppContext, input: &WasteInput) -> Result<()> {
    let _lock = ctx.lock()?;
    let mut tracker = ctx.open_tracker()?;

    let outcome = tracker
        .log_waste(input, today())
        .context("Failed to log waste")?;

    let event = &outcome.event;
    println!(
        "Logged #{}: {} {} of {} ({})",
        event.id,
        event.quantity,
        event.unit,
        event.waste_type,
        event.category.label()
    );
    print_gamification(&outcome.gamification);
    println!(
        "Streak: {} day(s) | Recycling rate: {:.1}%",
        outcome.streak_days, outcome.stats.recycling_rate
    );

    Ok(())
}

/// Delete a waste entry by id
pub fn delete_command(ctx: &AppContext, id: u64) -> Result<()> {
    let _lock = ctx.lock()?;
    let mut tracker = ctx.open_tracker()?;

    let removed = tracker.delete_event(id)?;
    println!("Deleted #{}: {} ({})", removed.id, removed.waste_type, removed.category);
    Ok(())
}

pub(super) fn print_gamification(events: &[GamificationEvent]) {
    for event in events {
        match event {
            GamificationEvent::PointsAwarded { amount, reason } => {
                println!("  +{} points  {}", amount, reason);
            }
            GamificationEvent::AchievementUnlocked(achievement) => {
                println!(
                    "  {} Achievement unlocked: {} - {}",
                    achievement.icon, achievement.name, achievement.description
                );
            }
            GamificationEvent::LevelUp(level_up) => {
                println!("  Level up! {} -> {}", level_up.old_level, level_up.new_level);
            }
        }
    }
}
