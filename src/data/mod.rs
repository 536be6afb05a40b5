//! Typed API resources
//!
//! Response shapes for a few commonly used PokeAPI resources, plus the
//! endpoint helpers used to address them. Fields the API returns but these
//! shapes do not model are ignored when decoding.

pub mod berry;
pub mod pokemon;

pub use berry::Berry;
pub use pokemon::{Pokemon, PokemonAbility, PokemonStat, PokemonType};

use serde::{Deserialize, Serialize};

/// Default page offset for list endpoints
pub const DEFAULT_OFFSET: u32 = 0;

/// Default page size for list endpoints
pub const DEFAULT_LIMIT: u32 = 20;

/// Reference to another resource by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    /// Name of the referenced resource
    pub name: String,
    /// URL of the referenced resource
    pub url: String,
}

/// One page of a resource listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResourceList {
    /// Total number of resources available
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Resources on this page
    pub results: Vec<NamedApiResource>,
}

/// Endpoint for one page of a resource listing, e.g. `pokemon?offset=0&limit=20`
pub fn resource_endpoint(resource: &str, offset: Option<u32>, limit: Option<u32>) -> String {
    format!(
        "{}?offset={}&limit={}",
        resource,
        offset.unwrap_or(DEFAULT_OFFSET),
        limit.unwrap_or(DEFAULT_LIMIT)
    )
}

/// Endpoint for a single resource addressed by id or name, e.g. `pokemon/25`
pub fn item_endpoint(resource: &str, id_or_name: &str) -> String {
    format!("{}/{}", resource, id_or_name)
}
