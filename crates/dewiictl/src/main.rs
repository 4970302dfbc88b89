//! dewiictl - inspect reader progression from the command line

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dewii_shared::{DewiiConfig, VERSION};
use dewiictl::commands;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter (e.g. `DEWII_LOG=debug`)
const LOG_ENV: &str = "DEWII_LOG";

#[derive(Parser)]
#[command(name = "dewiictl")]
#[command(about = "DEWII progression engine - XP, levels and titles", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Config file (defaults to $DEWII_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive XP, level and title from a UserProgress JSON document
    Progression {
        /// JSON file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print JSON instead of the profile card
        #[arg(long)]
        json: bool,
    },

    /// Show the level threshold table
    Levels {
        /// Last level to show
        #[arg(long)]
        up_to: Option<u32>,
    },

    /// Show the active title table
    Titles,

    /// List level-ups between two UserProgress snapshots
    Diff {
        #[arg(long)]
        before: PathBuf,

        #[arg(long)]
        after: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Compute streaks from a JSON array of YYYY-MM-DD days
    Streaks {
        /// JSON file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Reference day (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,

        #[arg(long)]
        json: bool,
    },
}

/// `-v` wins over `DEWII_LOG`; otherwise the env filter applies, then `warn`
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_logging(verbose: bool) {
    let env = std::env::var(LOG_ENV).ok();
    let filter = log_filter(verbose, env.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DewiiConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let engine = config.engine()?;
    let color = !cli.no_color;

    let output = match cli.command {
        Commands::Progression { file, json } => {
            commands::progression(&engine, file.as_deref(), json, color)?
        }
        Commands::Levels { up_to } => {
            commands::levels(&engine, up_to.unwrap_or(config.levels.table_rows), color)
        }
        Commands::Titles => commands::titles(&engine, color),
        Commands::Diff {
            before,
            after,
            json,
        } => commands::diff(&engine, &before, &after, json, color)?,
        Commands::Streaks { file, today, json } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            commands::streaks(file.as_deref(), today, json, color)?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
