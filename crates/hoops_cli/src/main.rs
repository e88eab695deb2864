//! Hoops CLI
//!
//! players.csv + games.csv → three roster questions → stdout report

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hoops_core::QueryConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Answer roster questions from player and game files", long_about = None)]
struct Cli {
    /// Roster file (overrides HOOPS_PLAYERS_PATH)
    #[arg(long)]
    players: Option<PathBuf>,

    /// Games file (overrides HOOPS_GAMES_PATH)
    #[arg(long)]
    games: Option<PathBuf>,

    /// How many of the heaviest male players to list
    #[arg(long, default_value_t = hoops_core::config::DEFAULT_TOP_COUNT)]
    top: usize,

    /// Country for the tallest female player question
    #[arg(long, default_value = hoops_core::config::DEFAULT_TALLEST_COUNTRY)]
    tallest_country: String,

    /// Country for the highest scoring male player question
    #[arg(long, default_value = hoops_core::config::DEFAULT_SCORER_COUNTRY)]
    scorer_country: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Env-derived config with explicit flags applied on top
    fn into_config(self) -> QueryConfig {
        let mut config = QueryConfig::from_env();
        if let Some(players) = self.players {
            config.players_path = players;
        }
        if let Some(games) = self.games {
            config.games_path = games;
        }
        config.top_count = self.top;
        config.tallest_country = self.tallest_country;
        config.scorer_country = self.scorer_country;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let format = cli.format;
    let config = cli.into_config();
    log::debug!(
        "Reading roster from {} and games from {}",
        config.players_path.display(),
        config.games_path.display()
    );

    let report = hoops_core::run(&config).context("Failed to load player data")?;

    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => {
            let json = report.to_json().context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
