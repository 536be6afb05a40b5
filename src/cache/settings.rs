//! Cache policy

use std::time::Duration;

use rand::Rng;

/// Lower bound of the randomized entry lifetime
pub const DEFAULT_MIN_EXPIRE: Duration = Duration::from_secs(10 * 60);

/// Upper bound of the randomized entry lifetime
pub const DEFAULT_MAX_EXPIRE: Duration = Duration::from_secs(15 * 60);

/// How often the background sweep purges expired entries
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Caller-adjustable cache policy
///
/// May be changed at any time, including between requests. Changes apply to
/// entries written afterwards; existing entries keep their expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// Shortest lifetime drawn for a new entry
    pub min_expire: Duration,
    /// Longest lifetime drawn for a new entry
    pub max_expire: Duration,
    /// Whether lookups consult the cache at all
    pub use_cache: bool,
    /// Fixed lifetime overriding the random draw
    pub custom_expire: Option<Duration>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            min_expire: DEFAULT_MIN_EXPIRE,
            max_expire: DEFAULT_MAX_EXPIRE,
            use_cache: true,
            custom_expire: None,
        }
    }
}

impl CacheSettings {
    /// Picks the lifetime for a newly written entry
    ///
    /// Uses `custom_expire` when set, otherwise a uniform draw from
    /// `[min_expire, max_expire]`. An inverted range collapses to `min_expire`.
    pub fn pick_expiry(&self) -> Duration {
        if let Some(custom) = self.custom_expire {
            return custom;
        }
        if self.max_expire <= self.min_expire {
            return self.min_expire;
        }
        rand::thread_rng().gen_range(self.min_expire..=self.max_expire)
    }
}
