//! Process configuration, read once at start-up

use anyhow::{Context, Result};
use std::env;

use seolens_providers::ProvidersConfig;

pub const DEFAULT_PORT: u16 = 5001;

/// Everything the binary needs: where to listen and how to reach the providers
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Load `.env` if present, then read the environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            _ => DEFAULT_PORT,
        };
        let providers = ProvidersConfig::from_lookup(&lookup)?;

        Ok(Self { port, providers })
    }
}
