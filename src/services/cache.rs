use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::Identity;

/// In-memory memo of mutual matches
///
/// Swipe records are immutable, so once two users match they stay matched.
/// Only positive results are stored: a cached entry can expire but never
/// becomes wrong, and a miss just falls back to the ledger.
pub struct MatchCache {
    matches: moka::future::Cache<String, ()>,
}

impl MatchCache {
    /// Create a new match cache
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let matches = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { matches }
    }

    /// True if the pair is known to be matched
    pub async fn is_known_match(&self, a: &Identity, b: &Identity) -> bool {
        let key = CacheKey::pair(a, b);
        let hit = self.matches.get(&key).await.is_some();
        if hit {
            tracing::trace!("Match cache hit: {}", key);
        }
        hit
    }

    /// Remember that the pair is matched
    pub async fn remember_match(&self, a: &Identity, b: &Identity) {
        let key = CacheKey::pair(a, b);
        self.matches.insert(key.clone(), ()).await;
        tracing::trace!("Match cached: {}", key);
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.matches.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Order-independent key for a pair of users, since matching is symmetric
    pub fn pair(a: &Identity, b: &Identity) -> String {
        if a <= b {
            format!("match:{}:{}", a, b)
        } else {
            format!("match:{}:{}", b, a)
        }
    }
}
