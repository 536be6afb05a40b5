//! Concurrent cache store with per-entry expiry

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::task::JoinHandle;

use super::CacheSettings;

/// A cached response body and the moment it stops being served
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Bytes,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Maps endpoints to raw response bytes
///
/// Safe to share between tasks behind an `Arc`; reads take a shared lock and
/// writes an exclusive one. Callers receive cheap clones of the stored bytes,
/// never references into the map.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    settings: RwLock<CacheSettings>,
}

impl CacheStore {
    /// Creates an empty store using the given policy
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            settings: RwLock::new(settings),
        }
    }

    /// Current cache policy
    pub fn settings(&self) -> CacheSettings {
        *self.settings.read()
    }

    /// Replaces the cache policy
    pub fn set_settings(&self, settings: CacheSettings) {
        *self.settings.write() = settings;
    }

    /// Edits the cache policy in place
    pub fn update_settings(&self, f: impl FnOnce(&mut CacheSettings)) {
        f(&mut self.settings.write());
    }

    /// Returns the bytes stored for `key` if present and not expired
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.is_expired(Utc::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Stores `value` under `key`, replacing any previous entry
    ///
    /// The lifetime comes from [`CacheSettings::pick_expiry`].
    pub fn set(&self, key: impl Into<String>, value: Bytes) {
        let ttl = self.settings().pick_expiry();
        let now = Utc::now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.entries
            .write()
            .insert(key.into(), CacheEntry { value, expires_at });
    }

    /// Drops every entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes expired entries and returns how many were dropped
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of stored entries, including expired ones not yet purged
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Spawns a task that purges expired entries every `interval`
///
/// The task only holds a weak reference and stops on its own once the store
/// is dropped. Must be called from within a tokio runtime.
pub fn spawn_sweeper(store: &Arc<CacheStore>, interval: Duration) -> JoinHandle<()> {
    let store: Weak<CacheStore> = Arc::downgrade(store);
    let interval = interval.max(Duration::from_millis(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Skip the first tick (immediate)
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let Some(store) = store.upgrade() else {
                break;
            };
            let removed = store.purge_expired();
            if removed > 0 {
                tracing::debug!("cache sweep: removed {} expired entries", removed);
            }
        }
    })
}
