//! pokeapi - fetch PokeAPI resources from the command line
//!
//! Fetches every endpoint given on the command line concurrently through one
//! shared client and prints the decoded JSON documents in argument order.

use std::process::ExitCode;

use clap::Parser;
use futures::future::join_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokeapi::cli::{Cli, StartupConfig};
use pokeapi::{CacheSettings, PokeApiClient};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokeapi=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = PokeApiClient::builder()
        .api_config(config.api.clone())
        .cache_settings(CacheSettings {
            use_cache: config.use_cache,
            ..Default::default()
        })
        .sweep_interval(None)
        .build();
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("querying {}", client.api_config());

    let results = join_all(
        config
            .endpoints
            .iter()
            .map(|endpoint| client.fetch::<serde_json::Value>(endpoint)),
    )
    .await;

    let mut failed = false;
    for (endpoint, result) in config.endpoints.iter().zip(results) {
        let rendered = result.and_then(|value| {
            let text = if config.compact {
                serde_json::to_string(&value)
            } else {
                serde_json::to_string_pretty(&value)
            };
            text.map_err(pokeapi::Error::from)
        });

        match rendered {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error fetching {}: {}", endpoint, e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
