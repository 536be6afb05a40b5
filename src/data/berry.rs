//! Berry resource

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

/// A berry as returned by `berry/{id or name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Berry {
    pub id: u32,
    pub name: String,
    /// Hours for the tree to grow one stage
    pub growth_time: u32,
    pub max_harvest: u32,
    pub natural_gift_power: u32,
    /// Size in millimetres
    pub size: u32,
    pub smoothness: u32,
    pub soil_dryness: u32,
    pub firmness: NamedApiResource,
    pub item: NamedApiResource,
}
