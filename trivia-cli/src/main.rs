//! trivia CLI - runs and maintains the trivia question API
//!
//! - `serve`: HTTP API over PostgreSQL or a seeded in-memory store
//! - `migrate`: create the schema
//! - `seed`: create the schema and load starter data

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::TriviaConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia questions and quizzes over a JSON API",
    long_about = "Serve paginated trivia questions and categories, search, creation, deletion \
                  and random quiz selection from PostgreSQL or an in-memory store."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to config file (default: ./trivia.toml if present)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if they do not exist
    Migrate(commands::db::DbArgs),
    /// Create tables and load starter categories and questions
    Seed(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TriviaConfig::load(cli.config.as_deref())?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        level: config.log.level.clone(),
    })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, config).await,
        Commands::Migrate(args) => commands::db::run_migrate(args, config).await,
        Commands::Seed(args) => commands::db::run_seed(args, config).await,
    }
}
