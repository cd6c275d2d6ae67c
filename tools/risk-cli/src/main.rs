//! # Risk CLI
//!
//! Command-line front end for the breakeven / zero-equity calculator.

mod cli;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{apply, Cli, Commands};
use config::CliConfig;
use position_book::StateStore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CliConfig::default(),
    };

    let store = StateStore::new(config.resolve_state_path(cli.state.as_deref()));
    let mut book = store.load();
    let seeded = book.seed_if_empty();

    let command = cli.command.unwrap_or(Commands::Show);
    let changed = apply(&mut book, &command)?;
    if changed || seeded {
        store
            .save(&book)
            .with_context(|| format!("failed to save state to {}", store.path().display()))?;
    }

    let metrics = book.evaluate(&config.engine);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        print!("{}", render::render(&book, &metrics));
    }

    Ok(())
}
