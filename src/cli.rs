//! Command-line interface parsing for the pokeapi binary
//!
//! Parses arguments with clap and turns them into the configuration the
//! binary builds its client from.

use clap::Parser;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::error::ConfigError;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The --api-url value could not be used
    #[error("Invalid API url '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: ConfigError,
    },

    /// An endpoint argument was empty
    #[error("Invalid endpoint: endpoints must not be empty")]
    EmptyEndpoint,
}

/// Fetch resources from the PokeAPI REST API and print them as JSON
#[derive(Parser, Debug)]
#[command(name = "pokeapi")]
#[command(about = "Fetch PokeAPI resources and print them as JSON")]
#[command(version)]
pub struct Cli {
    /// Endpoints relative to /api/v2/
    ///
    /// Examples:
    ///   pokeapi pokemon/25
    ///   pokeapi berry/cheri "pokemon?offset=20&limit=5"
    #[arg(required = true, value_name = "ENDPOINT")]
    pub endpoints: Vec<String>,

    /// API server url, overriding $POKEAPI_URL (default: https://pokeapi.co)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Do not serve responses from the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Print each document on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Configuration derived from CLI arguments for a single run
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// API server to query
    pub api: ApiConfig,
    /// Endpoints to fetch, without leading slashes
    pub endpoints: Vec<String>,
    /// Whether cached responses may be served
    pub use_cache: bool,
    /// Whether to print compact JSON
    pub compact: bool,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// Without `--api-url` the `POKEAPI_URL` environment variable (or the
    /// public API) is used.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the url or an endpoint is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let api = match &cli.api_url {
            Some(url) => ApiConfig::parse(url).map_err(|source| CliError::InvalidApiUrl {
                url: url.clone(),
                source,
            })?,
            None => ApiConfig::from_env(),
        };

        let endpoints = cli
            .endpoints
            .iter()
            .map(|e| normalize_endpoint(e))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StartupConfig {
            api,
            endpoints,
            use_cache: !cli.no_cache,
            compact: cli.compact,
        })
    }
}

/// Strips surrounding whitespace and leading slashes from an endpoint argument
pub fn normalize_endpoint(raw: &str) -> Result<String, CliError> {
    let endpoint = raw.trim().trim_start_matches('/');
    if endpoint.is_empty() {
        return Err(CliError::EmptyEndpoint);
    }
    Ok(endpoint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_single_endpoint() {
        let cli = Cli::parse_from(["pokeapi", "pokemon/25"]);
        assert_eq!(cli.endpoints, vec!["pokemon/25"]);
        assert!(cli.api_url.is_none());
        assert!(!cli.no_cache);
        assert!(!cli.compact);
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::parse_from([
            "pokeapi",
            "--api-url",
            "http://localhost:8000",
            "--no-cache",
            "--compact",
            "pokemon/1",
            "berry/1",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8000"));
        assert!(cli.no_cache);
        assert!(cli.compact);
        assert_eq!(cli.endpoints.len(), 2);
    }

    #[test]
    fn test_cli_requires_an_endpoint() {
        assert!(Cli::try_parse_from(["pokeapi"]).is_err());
    }

    #[test]
    fn test_startup_config_from_cli_with_api_url() {
        let cli = Cli::parse_from(["pokeapi", "--api-url", "http://localhost:8000", "/pokemon/1"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api.host(), "localhost:8000");
        assert_eq!(config.endpoints, vec!["pokemon/1"]);
        assert!(config.use_cache);
    }

    #[test]
    fn test_startup_config_no_cache() {
        let cli = Cli::parse_from(["pokeapi", "--api-url", "https://pokeapi.co", "--no-cache", "berry/1"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(!config.use_cache);
    }

    #[test]
    fn test_startup_config_invalid_api_url() {
        let cli = Cli::parse_from(["pokeapi", "--api-url", ":::bad:::", "pokemon/1"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("Invalid API url"));
        assert!(err.to_string().contains(":::bad:::"));
    }

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(normalize_endpoint("  /pokemon/1 ").unwrap(), "pokemon/1");
        assert!(matches!(normalize_endpoint("///"), Err(CliError::EmptyEndpoint)));
    }
}
