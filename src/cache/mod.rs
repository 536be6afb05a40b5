//! In-memory response cache
//!
//! Raw API responses are kept per endpoint with a randomized expiry so that
//! entries written together do not all expire together. Expired entries are
//! hidden from lookups immediately and reclaimed by a periodic sweep.

mod settings;
mod store;

pub use settings::{CacheSettings, DEFAULT_MAX_EXPIRE, DEFAULT_MIN_EXPIRE, DEFAULT_SWEEP_INTERVAL};
pub use store::{spawn_sweeper, CacheStore};
