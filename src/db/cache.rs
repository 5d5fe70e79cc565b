use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::MovieRecord;

/// How long a cached search batch stays valid (6 hours)
pub const SEARCH_CACHE_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Keys for the process-wide result cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    MovieSearch { query: String, limit: usize },
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::MovieSearch { query, limit } => {
                write!(f, "search:{}:{}", query.to_lowercase(), limit)
            }
        }
    }
}

struct CacheEntry {
    batch: Vec<MovieRecord>,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Process-wide, mutex-guarded search result cache
///
/// Entries expire lazily: an expired entry is removed on the next lookup
/// that touches its key. There is no capacity bound; entries are small
/// normalized batches and the key space is mood-driven and narrow.
#[derive(Clone, Default)]
pub struct Cache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl Cache {
    /// Creates a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a batch from the cache by key
    ///
    /// Returns `None` on miss or when the entry has outlived its TTL, in
    /// which case the stale entry is evicted.
    pub fn get_from_cache(&self, key: &CacheKey) -> Option<Vec<MovieRecord>> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let formatted = format!("{}", key);
        match entries.get(&formatted) {
            Some(entry) if entry.is_expired() => {
                entries.remove(&formatted);
                tracing::debug!(key = %formatted, "Evicted expired cache entry");
                None
            }
            Some(entry) => Some(entry.batch.clone()),
            None => None,
        }
    }

    /// Stores a batch in the cache under the given key
    pub fn set_in_cache(&self, key: &CacheKey, batch: &[MovieRecord], ttl: Duration) {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|delta| Utc::now().checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        entries.insert(
            format!("{}", key),
            CacheEntry {
                batch: batch.to_vec(),
                expires_at,
            },
        );
    }

    /// Number of stored entries (expired-but-unevicted ones included)
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
