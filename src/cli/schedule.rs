//! Collection schedule commands

use anyhow::Result;

use ecotrack::ScheduleInput;
use ecotrack::stats::today;

use super::AppContext;

pub fn add_command(ctx: &AppContext, input: &ScheduleInput) -> Result<()> {
    let _lock = ctx.lock()?;
    let mut tracker = ctx.open_tracker()?;

    let entry = tracker.add_collection(input)?;
    println!("Scheduled #{}: {} on {}", entry.id, entry.waste_type, entry.date);
    Ok(())
}

/// Show pickups from today on
pub fn list_command(ctx: &AppContext) -> Result<()> {
    let tracker = ctx.open_tracker()?;
    let upcoming = tracker.upcoming_collections(today());

    if upcoming.is_empty() {
        println!("No upcoming collections.");
        return Ok(());
    }

    println!("Upcoming collections ({}):\n", upcoming.len());
    for entry in upcoming {
        let time = entry.time.as_deref().unwrap_or("--:--");
        println!("  #{} {} {} {}", entry.id, entry.date, time, entry.waste_type);
        if let Some(notes) = &entry.notes {
            println!("      {}", notes);
        }
    }
    Ok(())
}

pub fn remove_command(ctx: &AppContext, id: u64) -> Result<()> {
    let _lock = ctx.lock()?;
    let mut tracker = ctx.open_tracker()?;

    let removed = tracker.remove_collection(id)?;
    println!("Removed #{}: {} on {}", removed.id, removed.waste_type, removed.date);
    Ok(())
}
