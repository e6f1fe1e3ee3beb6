//! Tracing setup for the trivia CLI
//!
//! Usage:
//!   trivia --debug serve             # Debug logging to console
//!   RUST_LOG=trivia_server=debug ... # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                         # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level if RUST_LOG is not set)
    pub debug: bool,
    /// Level from the config file, used when RUST_LOG is not set
    pub level: Option<String>,
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let fallback = if config.debug {
        "debug"
    } else {
        config.level.as_deref().unwrap_or("info")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
