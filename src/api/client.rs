//! PokeAPI client
//!
//! Every request goes through the response cache, keyed by its full URL.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for fetching PokeAPI resources.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Builds a client and its cache from configuration.
    ///
    /// Must be called within a Tokio runtime, since the cache starts its reaper.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;
        let cache = Cache::with_sweep_interval(config.cache_ttl(), config.sweep_interval());

        Ok(Self::with_cache(&config.api_url, http, cache))
    }

    /// Creates a client around an existing HTTP client and cache.
    pub fn with_cache(base_url: &str, http: reqwest::Client, cache: Cache) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of the location-area listing.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Fetches one page of the location-area listing.
    ///
    /// `url` is either [`Self::first_page_url`] or a `next`/`previous` cursor
    /// from an earlier page.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    /// Fetches a location area and its possible encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Stops the cache reaper.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }

    /// Internal helper: cached GET followed by JSON decoding.
    ///
    /// Only successful responses are cached. A payload that fails to decode
    /// stays cached; the error is returned to the caller.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(serde_json::from_slice(&body)?);
        }
        debug!(url, "cache miss");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        } else if !status.is_success() {
            warn!(url, status = status.as_u16(), "unexpected PokeAPI status");
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.to_vec());

        Ok(serde_json::from_slice(&body)?)
    }
}
