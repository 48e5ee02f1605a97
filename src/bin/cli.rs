//! cfbscrape CLI
//!
//! Local execution entry point for the scraper.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cfbscrape::{
    error::Result,
    models::Config,
    services::{Runner, TeamDirectory},
    utils::http,
};

/// cfbscrape - College Football Statistics Scraper
#[derive(Parser, Debug)]
#[command(
    name = "cfbscrape",
    version,
    about = "Scrapes team records, schedules and rosters into CSV files"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "cfbscrape.toml")]
    config: PathBuf,

    /// Override the output data directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every team (or a single one) into per-team CSV files
    Scrape {
        /// Only scrape the named team
        #[arg(long)]
        team: Option<String>,
    },

    /// List the teams discovered on the site
    Teams,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("cfbscrape starting...");

    let mut config = Config::load_or_default(&cli.config);
    if let Some(dir) = cli.output_dir {
        config.output.data_dir = dir;
    }
    config.validate()?;

    let client = http::create_client(&config.http)?;

    match cli.command {
        Command::Scrape { team } => {
            let runner = Runner::new(&client, &config);
            let summary = runner.run(team.as_deref())?;

            log::info!(
                "Teams processed: {}/{}",
                summary.teams_total - summary.teams_failed,
                summary.teams_total
            );
            log::info!(
                "Rows written: {} record, {} schedule, {} roster",
                summary.record_rows,
                summary.schedule_rows,
                summary.roster_rows
            );
            if summary.teams_failed > 0 {
                log::warn!("{} team(s) failed; see errors above", summary.teams_failed);
            }
        }

        Command::Teams => {
            let directory = TeamDirectory::new(&client, &config.http);
            let teams = directory.fetch_all()?;
            for team in &teams {
                println!("{}\t{}", team.name, team.path);
            }
            log::info!("{} teams discovered", teams.len());
        }

        Command::Validate => {
            log::info!("Configuration OK ({} extractors enabled)", config.extractors.len());
        }
    }

    log::info!("Done!");

    Ok(())
}
