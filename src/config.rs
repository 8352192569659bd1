//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI base URL
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

const DEFAULT_CACHE_TTL: u64 = 300;
const DEFAULT_HTTP_TIMEOUT: u64 = 10;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the PokeAPI, without trailing slash
    pub api_url: String,
    /// Maximum age in seconds of a cached response
    pub cache_ttl: u64,
    /// Seconds between background cache sweeps
    pub sweep_interval: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_SWEEP_INTERVAL` - Sweep interval in seconds (default: the TTL)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    ///
    /// Missing, unparseable or zero values fall back to the default.
    pub fn from_env() -> Self {
        let cache_ttl = seconds_var("POKEDEX_CACHE_TTL").unwrap_or(DEFAULT_CACHE_TTL);

        Self {
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cache_ttl,
            sweep_interval: seconds_var("POKEDEX_SWEEP_INTERVAL").unwrap_or(cache_ttl),
            http_timeout: seconds_var("POKEDEX_HTTP_TIMEOUT").unwrap_or(DEFAULT_HTTP_TIMEOUT),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

fn seconds_var(name: &str) -> Option<u64> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|secs| *secs > 0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            sweep_interval: DEFAULT_CACHE_TTL,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}
