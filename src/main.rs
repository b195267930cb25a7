use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "ecotrack")]
#[command(about = "Track household waste, recycling impact and eco achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.ecotrack/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the tracker data (overrides the config)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a waste entry
    Log {
        /// recyclable, organic, hazardous or general
        #[arg(long)]
        category: String,

        /// What was thrown away, e.g. "Plastic Bottles"
        #[arg(long = "type")]
        waste_type: String,

        #[arg(long)]
        quantity: String,

        /// kg (default), pieces or liters
        #[arg(long)]
        unit: Option<String>,

        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a waste entry by id
    Delete { id: u64 },

    /// List logged entries
    List {
        #[arg(long)]
        category: Option<String>,

        /// Only entries on this day
        #[arg(long)]
        date: Option<String>,

        /// Inclusive start date
        #[arg(long)]
        from: Option<String>,

        /// Inclusive end date
        #[arg(long)]
        to: Option<String>,

        /// Show the N most recent entries
        #[arg(long)]
        recent: Option<usize>,
    },

    /// Show the dashboard: totals, impact, streak and level
    Stats {
        /// 7d, 30d, 90d or all
        #[arg(long, default_value = "all")]
        range: String,
    },

    /// Show all achievements and progress
    Achievements,

    /// Estimate the impact of disposing of something
    Calc {
        #[arg(long)]
        category: String,

        #[arg(long = "type")]
        waste_type: String,

        #[arg(long)]
        quantity: String,

        #[arg(long)]
        unit: Option<String>,
    },

    /// Manage the collection schedule
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },

    /// Show where common items go
    Guide {
        /// Only show one category
        category: Option<String>,

        /// Look up a single item by name
        #[arg(long)]
        item: Option<String>,
    },

    /// Read recycling tips and short articles
    Learn {
        /// Only show articles on one topic (e.g. plastic, composting)
        topic: Option<String>,
    },

    /// Initialize ~/.ecotrack/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ScheduleCommands {
    /// Add a collection pickup
    Add {
        #[arg(long)]
        date: String,

        #[arg(long = "type")]
        waste_type: String,

        /// HH:MM
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Show upcoming pickups
    List,

    /// Remove a pickup by id
    Remove { id: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Commands::Init { force } = cli.command {
        return cli::init::init_command(cli.config, cli.data_dir, force);
    }

    let ctx = cli::AppContext::load(cli.config, cli.data_dir)?;

    match cli.command {
        Commands::Log {
            category,
            waste_type,
            quantity,
            unit,
            date,
        } => {
            let input = ecotrack::WasteInput {
                date,
                category: Some(category),
                waste_type: Some(waste_type),
                quantity: Some(quantity),
                unit,
            };
            cli::log::log_command(&ctx, &input)?;
        }
        Commands::Delete { id } => {
            cli::log::delete_command(&ctx, id)?;
        }
        Commands::List {
            category,
            date,
            from,
            to,
            recent,
        } => {
            let args = cli::list::ListArgs {
                category,
                date,
                from,
                to,
                recent,
            };
            cli::list::list_command(&ctx, &args)?;
        }
        Commands::Stats { range } => {
            cli::stats::stats_command(&ctx, &range)?;
        }
        Commands::Achievements => {
            cli::stats::achievements_command(&ctx)?;
        }
        Commands::Calc {
            category,
            waste_type,
            quantity,
            unit,
        } => {
            cli::calc::calc_command(&category, &waste_type, &quantity, unit.as_deref())?;
        }
        Commands::Schedule { command } => match command {
            ScheduleCommands::Add {
                date,
                waste_type,
                time,
                notes,
            } => {
                let input = ecotrack::ScheduleInput {
                    date: Some(date),
                    waste_type: Some(waste_type),
                    time,
                    notes,
                };
                cli::schedule::add_command(&ctx, &input)?;
            }
            ScheduleCommands::List => cli::schedule::list_command(&ctx)?,
            ScheduleCommands::Remove { id } => cli::schedule::remove_command(&ctx, id)?,
        },
        Commands::Guide { category, item } => {
            cli::guide::guide_command(category.as_deref(), item.as_deref())?;
        }
        Commands::Learn { topic } => cli::learn::learn_command(topic.as_deref())?,
        Commands::Init { .. } => {}
    }

    Ok(())
}
