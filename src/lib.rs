//! PokeAPI client library
//!
//! Fetches resources from the PokeAPI REST API, caching raw responses in
//! memory with randomized expiry and retrying transient failures with
//! backoff. See [`PokeApiClient`] for the entry point.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod http;

pub use cache::{CacheSettings, CacheStore};
pub use client::{PokeApiClient, PokeApiClientBuilder};
pub use config::ApiConfig;
pub use error::{ConfigError, Error, TransportError};
