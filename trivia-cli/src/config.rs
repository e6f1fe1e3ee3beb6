//! Configuration loading
//!
//! Layers, lowest to highest: defaults, TOML file, environment, flags.
//! The file is `--config <path>` when given, else `./trivia.toml` if present.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::ServerConfig;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "trivia.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriviaConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: SocketAddr,
    /// Empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind: defaults.bind_addr,
            cors_origins: defaults.cors_origins,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// Filter used when RUST_LOG is unset, e.g. "info" or "trivia_server=debug"
    pub level: Option<String>,
}

impl TriviaConfig {
    /// Load file and environment layers.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::locate(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Override from `DATABASE_URL` and `TRIVIA_BIND`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(bind) = lookup("TRIVIA_BIND").filter(|b| !b.is_empty()) {
            self.server.bind = bind
                .parse()
                .with_context(|| format!("TRIVIA_BIND is not a socket address: {}", bind))?;
        }
        Ok(())
    }

    /// Database URL or a pointer to where it can be set.
    pub fn database_url(&self) -> Result<&str> {
        self.database.url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or [database] url in trivia.toml",
        )
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.server.bind,
            cors_origins: self.server.cors_origins.clone(),
        }
    }
}
