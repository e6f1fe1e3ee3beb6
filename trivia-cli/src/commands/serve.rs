//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool_with_options, migrations, seed, PgStore};
use trivia_server::{run_server, MemoryStore, TriviaStore};

use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Allowed CORS origin, repeatable (default: any origin)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Serve from a seeded in-memory store instead of PostgreSQL
    #[arg(long, conflicts_with = "database_url")]
    pub in_memory: bool,

    /// Insert starter categories and questions into an empty database
    #[arg(long)]
    pub seed: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: TriviaConfig) -> Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if !args.cors_origins.is_empty() {
        config.server.cors_origins = args.cors_origins;
    }
    if let Some(url) = args.database_url {
        config.database.url = Some(url);
    }

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::info!("Using in-memory store");
        Arc::new(
            MemoryStore::seeded()
                .await
                .context("Failed to seed in-memory store")?,
        )
    } else {
        let pool = create_pool_with_options(config.database_url()?, config.database.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;

        let store = PgStore::new(pool);
        if args.seed {
            seed::run(&store).await.context("Failed to seed database")?;
        }
        Arc::new(store)
    };

    tracing::info!("Starting trivia API on {}", config.server.bind);
    run_server(store, config.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
