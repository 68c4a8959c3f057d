//! Gloomvale - Entry Point
//!
//! Parses CLI options, initializes logging, loads the enemy catalog and
//! game config, then hands control to the interactive session loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gloomvale::catalog::EnemyCatalog;
use gloomvale::core::{GameConfig, GameError, Result};
use gloomvale::entity::Character;
use gloomvale::session::Session;

#[derive(Parser, Debug)]
#[command(name = "gloomvale", about = "Turn-based terminal RPG")]
struct Cli {
    /// RNG seed for reproducible runs (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Enemy catalog JSON file (builtin table if omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Game config TOML file (defaults if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Character name (skips the interactive prompt)
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gloomvale=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.validate().map_err(GameError::Config)?;

    let catalog = match &cli.catalog {
        Some(path) => EnemyCatalog::load(path)?,
        None => EnemyCatalog::builtin(),
    };

    let rng = match cli.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    println!("=== Welcome to Gloomvale! ===");
    let name = match cli.name {
        Some(name) => name,
        None => prompt_name()?,
    };

    let player = Character::new(name, &config);
    Session::new(player, catalog, config, rng).run()
}

fn prompt_name() -> Result<String> {
    print!("Enter your character's name [Hero]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let name = input.trim();

    Ok(if name.is_empty() {
        "Hero".to_string()
    } else {
        name.to_string()
    })
}
