use std::{env, sync::Arc, time::Duration};

use reqwest::Client;
use thiserror::Error;

use crate::constants::*;

/// Immutable process configuration, resolved from the environment once at
/// startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub firecrawl_url: String,
    pub firecrawl_key: String,
    pub cost_per_1k_tokens: f64,
    pub fetch_timeout: Duration,
    pub firecrawl_timeout: Duration,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FIRECRAWL_API_KEY must be set (no fallback key is shipped)")]
    MissingFirecrawlKey,
}

impl AppConfig {
    /// Resolve configuration from the environment.
    ///
    /// The Firecrawl key is the one setting without a default: a missing key
    /// is a deployment error and the process refuses to start.
    pub fn from_env() -> Result<Self, ConfigError> {
        let firecrawl_key = env::var("FIRECRAWL_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingFirecrawlKey)?;

        let firecrawl_url =
            env::var("FIRECRAWL_URL").unwrap_or_else(|_| DEFAULT_FIRECRAWL_URL.into());

        let cost_per_1k_tokens = env::var("COST_PER_1K_TOKENS")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(DEFAULT_COST_PER_1K_TOKENS);

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);

        let firecrawl_timeout_secs = env::var("FIRECRAWL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FIRECRAWL_TIMEOUT_SECS);

        let port = env::var("HOST_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(5000);

        Ok(Self {
            firecrawl_url,
            firecrawl_key,
            cost_per_1k_tokens,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            firecrawl_timeout: Duration::from_secs(firecrawl_timeout_secs),
            port,
        })
    }
}

// ---------- App state shared by all handlers ----------

#[derive(Clone)]
pub struct App {
    pub client: Client,
    pub config: Arc<AppConfig>,
}
