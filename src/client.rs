//! PokeAPI client
//!
//! [`PokeApiClient`] ties the pieces together: it resolves endpoints against
//! the configured API url, serves responses from the cache when allowed,
//! fetches with retry on a miss, and decodes JSON into the caller's type.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::cache::{spawn_sweeper, CacheSettings, CacheStore, DEFAULT_SWEEP_INTERVAL};
use crate::config::ApiConfig;
use crate::data::{self, Berry, NamedApiResourceList, Pokemon};
use crate::error::{ConfigError, Error};
use crate::http::{ReqwestTransport, RetryConfig, RetryingFetcher, Sleeper, TokioSleeper, Transport};

/// Client for the PokeAPI REST API
///
/// Construct once and share by reference (or behind an `Arc`); all methods
/// take `&self` and the client is safe to use from many tasks at once.
pub struct PokeApiClient {
    api: RwLock<Arc<ApiConfig>>,
    cache: Arc<CacheStore>,
    fetcher: RetryingFetcher,
    sweeper: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("api", &*self.api.read())
            .field("cache_entries", &self.cache.len())
            .field("fetcher", &self.fetcher)
            .finish()
    }
}

impl Drop for PokeApiClient {
    fn drop(&mut self) {
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.abort();
        }
    }
}

impl PokeApiClient {
    /// Creates a client with default settings and the `POKEAPI_URL` override, if any
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> PokeApiClientBuilder {
        PokeApiClientBuilder::default()
    }

    /// Points the client at a different API server
    ///
    /// Accepts a full URL such as `http://localhost:8080`. On error the
    /// previous configuration stays in effect. Requests already in flight
    /// keep the configuration they started with.
    pub fn set_api_path(&self, raw: &str) -> Result<(), ConfigError> {
        let config = ApiConfig::parse(raw)?;
        tracing::info!("API url set to {}", config);
        *self.api.write() = Arc::new(config);
        Ok(())
    }

    /// Snapshot of the current API configuration
    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api.read().clone()
    }

    /// Absolute request URL for `endpoint` under the current configuration
    pub fn build_url(&self, endpoint: &str) -> String {
        self.api_config().build_url(endpoint)
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    pub fn cache_settings(&self) -> CacheSettings {
        self.cache.settings()
    }

    pub fn set_cache_settings(&self, settings: CacheSettings) {
        self.cache.set_settings(settings);
    }

    /// Enables or disables serving responses from the cache
    ///
    /// Fetched responses are stored either way, so re-enabling the cache
    /// benefits from requests made while it was off.
    pub fn set_use_cache(&self, use_cache: bool) {
        self.cache.update_settings(|s| s.use_cache = use_cache);
    }

    /// Drops every cached response
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Fetches `endpoint` and decodes the JSON body into `T`
    ///
    /// # Arguments
    /// * `endpoint` - Path relative to the API base, e.g. `pokemon/1`
    ///
    /// # Returns
    /// * `Ok(T)` - the decoded response, from the cache or the network
    /// * `Err(Error::Decode)` - if the body does not match `T`
    /// * `Err(_)` - fetch errors as returned by [`RetryingFetcher::get`]
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        let body = self.fetch_bytes(endpoint).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches the raw response body for `endpoint`
    pub async fn fetch_bytes(&self, endpoint: &str) -> Result<Bytes, Error> {
        if self.cache.settings().use_cache {
            if let Some(cached) = self.cache.get(endpoint) {
                tracing::debug!("cache hit for {}", endpoint);
                return Ok(cached);
            }
        }

        let url = self.build_url(endpoint);
        tracing::debug!("fetching {}", url);
        let body = self.fetcher.get(&url).await?;

        self.cache.set(endpoint, body.clone());
        Ok(body)
    }

    /// One page of a resource listing, e.g. `resource("pokemon", Some(20), Some(20))`
    pub async fn resource(
        &self,
        resource: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<NamedApiResourceList, Error> {
        self.fetch(&data::resource_endpoint(resource, offset, limit))
            .await
    }

    /// A Pokemon by id or name
    pub async fn pokemon(&self, id_or_name: &str) -> Result<Pokemon, Error> {
        self.fetch(&data::item_endpoint("pokemon", id_or_name)).await
    }

    /// A berry by id or name
    pub async fn berry(&self, id_or_name: &str) -> Result<Berry, Error> {
        self.fetch(&data::item_endpoint("berry", id_or_name)).await
    }
}

/// Builder for [`PokeApiClient`]
pub struct PokeApiClientBuilder {
    api_config: Option<ApiConfig>,
    cache_settings: CacheSettings,
    retry_config: RetryConfig,
    transport: Option<Arc<dyn Transport>>,
    sleeper: Option<Arc<dyn Sleeper>>,
    sweep_interval: Option<Duration>,
}

impl Default for PokeApiClientBuilder {
    fn default() -> Self {
        Self {
            api_config: None,
            cache_settings: CacheSettings::default(),
            retry_config: RetryConfig::default(),
            transport: None,
            sleeper: None,
            sweep_interval: Some(DEFAULT_SWEEP_INTERVAL),
        }
    }
}

impl PokeApiClientBuilder {
    /// Uses `config` instead of reading `POKEAPI_URL`
    pub fn api_config(mut self, config: ApiConfig) -> Self {
        self.api_config = Some(config);
        self
    }

    pub fn cache_settings(mut self, settings: CacheSettings) -> Self {
        self.cache_settings = settings;
        self
    }

    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Replaces the reqwest transport
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replaces the tokio sleeper used for backoff delays
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Interval of the background cache sweep; `None` disables it
    pub fn sweep_interval(mut self, interval: Option<Duration>) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Builds the client
    ///
    /// The cache sweep only starts when called inside a tokio runtime;
    /// otherwise expired entries are still hidden from lookups and dropped
    /// when overwritten or cleared.
    pub fn build(self) -> Result<PokeApiClient, Error> {
        let api = self.api_config.unwrap_or_else(ApiConfig::from_env);
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.retry_config.timeout)?),
        };
        let sleeper = self.sleeper.unwrap_or_else(|| Arc::new(TokioSleeper));
        let fetcher = RetryingFetcher::new(transport, sleeper, self.retry_config);
        let cache = Arc::new(CacheStore::new(self.cache_settings));

        let sweeper = match self.sweep_interval {
            Some(interval) if tokio::runtime::Handle::try_current().is_ok() => {
                Some(spawn_sweeper(&cache, interval))
            }
            _ => None,
        };

        Ok(PokeApiClient {
            api: RwLock::new(Arc::new(api)),
            cache,
            fetcher,
            sweeper,
        })
    }
}
