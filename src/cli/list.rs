//! List command implementation

use anyhow::{Context, Result, bail};

use ecotrack::stats::time_bucket::parse_day_bucket;
use ecotrack::{Category, EventFilter, WasteEvent};

use super::AppContext;

/// Raw `list` flags
#[derive(Debug, Default)]
pub struct ListArgs {
    pub category: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub recent: Option<usize>,
}

impl ListArgs {
    fn filter(&self) -> Result<EventFilter> {
        let category = match &self.category {
            Some(raw) => match Category::from_str(raw) {
                Some(c) => Some(c),
                None => bail!("Unknown category: {}", raw),
            },
            None => None,
        };

        Ok(EventFilter {
            category,
            date: parse_date_arg("--date", &self.date)?,
            start_date: parse_date_arg("--from", &self.from)?,
            end_date: parse_date_arg("--to", &self.to)?,
        })
    }
}

fn parse_date_arg(flag: &str, value: &Option<String>) -> Result<Option<chrono::NaiveDate>> {
    value
        .as_deref()
        .map(|raw| {
            parse_day_bucket(raw)
                .with_context(|| format!("Invalid {} (expected YYYY-MM-DD): {}", flag, raw))
        })
        .transpose()
}

/// Show logged entries. Without a filter, the most recent ones.
pub fn list_command(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let filter = args.filter()?;
    let tracker = ctx.open_tracker()?;

    let events: Vec<&WasteEvent> = match args.recent {
        Some(n) => tracker.recent_matching(&filter, n),
        None if filter.is_empty() => tracker.recent_events(ctx.config.tracking.recent_limit),
        None => tracker.list_events(&filter),
    };

    if events.is_empty() {
        println!("No waste entries found.");
        return Ok(());
    }

    println!("Waste entries ({} of {}):\n", events.len(), tracker.events().len());
    for event in events {
        println!(
            "  #{} {} [{}] {} - {} {}",
            event.id,
            event.date,
            event.category,
            event.waste_type,
            event.quantity,
            event.unit
        );
    }

    Ok(())
}
