//! Command-line entry point for elo-kfactor
//!
//! Rates a single two-player match and prints both players' new ratings.

use anyhow::{anyhow, Result};
use clap::Parser;
use elo_kfactor::config::{validate_config, AppConfig};
use elo_kfactor::rating::{EloRatingCalculator, RatingCalculator};
use elo_kfactor::types::{MatchOutcome, Player};
use std::path::PathBuf;
use tracing::{error, info};

/// Elo K-factor - rate a two-player match with rule-based K-factors
#[derive(Parser)]
#[command(
    name = "elo-kfactor",
    version,
    about = "Compute new Elo ratings for both players of a match",
    long_about = "Computes the new Elo rating of a player and their opponent after a match. \
                 The K-factor is chosen from ordered first-match-wins rules, configurable \
                 through a TOML file or environment variables."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Player rating (defaults to 1000)
    #[arg(long, value_name = "RATING", allow_negative_numbers = true)]
    player_rating: Option<f64>,

    /// Games the player has played (defaults to 0)
    #[arg(long, value_name = "GAMES")]
    player_games: Option<u32>,

    /// Opponent rating (defaults to 1000)
    #[arg(long, value_name = "RATING", allow_negative_numbers = true)]
    opponent_rating: Option<f64>,

    /// Games the opponent has played (defaults to 0)
    #[arg(long, value_name = "GAMES")]
    opponent_games: Option<u32>,

    /// Match result from the player's side
    #[arg(short, long, value_name = "OUTCOME", conflicts_with = "score", help = "win, draw or loss")]
    outcome: Option<MatchOutcome>,

    /// Raw score from the player's side (1 = win, 0.5 = draw, 0 = loss)
    #[arg(short, long, value_name = "SCORE", allow_negative_numbers = true)]
    score: Option<f64>,

    /// Scaling factor override
    #[arg(long, value_name = "FACTOR")]
    scaling_factor: Option<f64>,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without rating a match")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(scaling_factor) = args.scaling_factor {
        config.rating.scaling_factor = scaling_factor;
    }

    validate_config(&config)?;
    Ok(config)
}

fn match_score(args: &Args) -> Result<f64> {
    match (args.outcome, args.score) {
        (Some(outcome), _) => Ok(outcome.score()),
        (None, Some(score)) => Ok(score),
        (None, None) => Err(anyhow!("Either --outcome or --score is required")),
    }
}

fn run(args: &Args, config: AppConfig) -> Result<()> {
    let calculator = EloRatingCalculator::new(config.rating)?;

    let player = Player {
        rating: args.player_rating,
        games_played: args.player_games,
    };
    let opponent = Player {
        rating: args.opponent_rating,
        games_played: args.opponent_games,
    };
    let score = match_score(args)?;

    info!(
        "Rating match: {} ({} games) vs {} ({} games), score {}",
        player.rating(),
        player.games_played(),
        opponent.rating(),
        opponent.games_played(),
        score
    );

    let result = calculator.calculate_rating_changes(&player, &opponent, score)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "player:   {} -> {} ({:+}, K={})",
            result.player.old_rating,
            result.player.new_rating,
            result.player.delta(),
            result.player.k_factor
        );
        println!(
            "opponent: {} -> {} ({:+}, K={})",
            result.opponent.old_rating,
            result.opponent.new_rating,
            result.opponent.delta(),
            result.opponent.k_factor
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        info!("   Service: {}", config.service.name);
        info!("   Scaling factor: {}", config.rating.scaling_factor);
        info!(
            "   K-factor: default {} with {} rule(s)",
            config.rating.k_factor.default,
            config.rating.k_factor.rules.len()
        );
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Err(e) = run(&args, config) {
        error!("Rating failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
