//! API endpoint configuration
//!
//! Holds the scheme and host requests are sent to and turns relative
//! endpoints such as `pokemon/1` into absolute request URLs.

use std::env;
use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// Scheme used when none is configured
pub const DEFAULT_API_SCHEME: &str = "https";

/// Public PokeAPI host
pub const DEFAULT_API_HOST: &str = "pokeapi.co";

/// Path prepended to every endpoint
pub const API_BASE_PATH: &str = "/api/v2/";

/// Environment variable holding an optional API url override
pub const API_URL_ENV: &str = "POKEAPI_URL";

/// Scheme and host of the API server
///
/// The value is immutable; the client swaps whole values when the
/// configuration changes so readers never observe a half-updated pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    scheme: String,
    host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_API_SCHEME.to_string(),
            host: DEFAULT_API_HOST.to_string(),
        }
    }
}

impl ApiConfig {
    /// Parses a full API url such as `https://pokeapi.co` or `http://localhost:8080`
    ///
    /// Only the scheme and host (with port, when given) are kept. A scheme-less
    /// `//host` input falls back to [`DEFAULT_API_SCHEME`].
    ///
    /// # Errors
    /// * `ConfigError::Parse` if `raw` is not a valid URL
    /// * `ConfigError::MissingHost` if the URL has no host
    /// * `ConfigError::UnsupportedScheme` for anything other than http/https
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let url = if raw.starts_with("//") {
            Url::parse(&format!("{}:{}", DEFAULT_API_SCHEME, raw))?
        } else {
            Url::parse(raw)?
        };

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => return Err(ConfigError::MissingHost(raw.to_string())),
        };

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
        }

        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self {
            scheme: scheme.to_string(),
            host,
        })
    }

    /// Reads [`API_URL_ENV`], falling back to the defaults when it is unset or invalid
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::parse(&raw).unwrap_or_else(|e| {
                tracing::debug!("ignoring {}={:?}: {}", API_URL_ENV, raw, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Builds the absolute request URL for a relative endpoint
    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}://{}{}{}", self.scheme, self.host, API_BASE_PATH, endpoint)
    }
}

impl fmt::Display for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}
