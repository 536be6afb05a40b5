//! Error types for the PokeAPI client
//!
//! Every failure in the request pipeline is returned to the caller as an
//! [`Error`]; nothing here panics or aborts the process.

use thiserror::Error;

/// Errors raised while parsing an API url override
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override is not a syntactically valid URL
    #[error("failed to parse API url: {0}")]
    Parse(#[from] url::ParseError),

    /// The override parsed but has no host component
    #[error("failed to parse url host: {0}")]
    MissingHost(String),

    /// The override uses a scheme the transport cannot speak
    #[error("unsupported API url scheme: {0}")]
    UnsupportedScheme(String),
}

/// Failure of a single transport-level attempt (connect, timeout, body read)
#[derive(Debug, Error)]
pub enum TransportError {
    /// reqwest failed to build, send or read the request
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Any other transport failure
    #[error("transport failure: {0}")]
    Other(String),
}

/// Errors returned by [`crate::PokeApiClient`]
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, timeout or body-read failure on the last attempt
    #[error(transparent)]
    Network(#[from] TransportError),

    /// The API kept answering with a 5xx status
    #[error("server returned error (code: {status})")]
    Server { status: u16 },

    /// The API rejected the request with a 4xx status
    #[error("failed to retrieve data from URL {url} (code: {status})")]
    Client { url: String, status: u16 },

    /// Response or cached bytes did not match the requested shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid API url configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether the fetcher would retry an attempt that failed this way
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Server { .. })
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status } | Error::Client { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_message_includes_url_and_status() {
        let err = Error::Client {
            url: "https://pokeapi.co/api/v2/pokemon/nope".to_string(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("https://pokeapi.co/api/v2/pokemon/nope"));
        assert!(msg.contains("404"));
        assert!(!err.is_retryable());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_server_and_network_errors_are_retryable() {
        assert!(Error::Server { status: 503 }.is_retryable());
        assert!(Error::Network(TransportError::Other("reset".into())).is_retryable());
    }

    #[test]
    fn test_decode_error_is_not_retryable() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Decode(_)));
        assert!(!err.is_retryable());
        assert_eq!(err.status(), None);
    }
}
