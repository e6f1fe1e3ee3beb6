//! Database maintenance commands: migrate and seed

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool_with_options, migrations, seed, PgStore};

use crate::config::TriviaConfig;

/// Arguments shared by migrate and seed
#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

async fn connect(args: DbArgs, mut config: TriviaConfig) -> Result<PgStore> {
    if let Some(url) = args.database_url {
        config.database.url = Some(url);
    }

    let pool = create_pool_with_options(config.database_url()?, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(PgStore::new(pool))
}

/// Create tables if missing
pub async fn run_migrate(args: DbArgs, config: TriviaConfig) -> Result<()> {
    connect(args, config).await?;
    println!("Migrations applied");
    Ok(())
}

/// Create tables, then insert starter data into an empty database
pub async fn run_seed(args: DbArgs, config: TriviaConfig) -> Result<()> {
    let store = connect(args, config).await?;
    let report = seed::run(&store)
        .await
        .context("Failed to seed database")?;

    if report == seed::SeedReport::default() {
        println!("Database already has categories; nothing seeded");
    } else {
        println!(
            "Seeded {} categories and {} questions",
            report.categories, report.questions
        );
    }
    Ok(())
}
