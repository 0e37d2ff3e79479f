//! Cache-aware lyrics lookup

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::lyrics::{CachedLyrics, LookupError, LyricsClient, LyricsKey};
use crate::infrastructure::cache::TtlCache;

/// Configuration for the lyrics lookaside cache
#[derive(Debug, Clone)]
pub struct LyricsCacheConfig {
    /// Maximum number of cached lookups
    pub capacity: usize,
    /// Lifetime of each cached lookup, hits and misses alike
    pub ttl: Duration,
}

impl Default for LyricsCacheConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            ttl: Duration::from_secs(60 * 10), // 10 minutes
        }
    }
}

/// Lyrics lookups shielded by a TTL cache.
///
/// The provider is rate-sensitive and unreliable, so every resolved answer
/// is memoized for the TTL window, including "no lyrics" answers. Provider
/// faults are not answers and never enter the cache: retrying after an
/// outage goes straight back to the provider.
#[derive(Debug)]
pub struct LyricsService {
    client: Arc<dyn LyricsClient>,
    cache: TtlCache<LyricsKey, CachedLyrics>,
}

impl LyricsService {
    pub fn new(client: Arc<dyn LyricsClient>) -> Self {
        Self::with_config(client, LyricsCacheConfig::default())
    }

    pub fn with_config(client: Arc<dyn LyricsClient>, config: LyricsCacheConfig) -> Self {
        Self {
            client,
            cache: TtlCache::new(config.capacity, config.ttl),
        }
    }

    /// Looks up lyrics for a song, consulting the cache before the provider
    pub async fn lookup(&self, title: &str, artist: &str) -> Result<String, LookupError> {
        let key = LyricsKey::new(title, artist);

        if let Some(cached) = self.cache.get(&key) {
            debug!(%key, "lyrics cache hit");
            return match cached {
                CachedLyrics::Found(text) => Ok(text),
                CachedLyrics::NotFound => Err(LookupError::not_found(title, artist)),
            };
        }

        debug!(%key, "lyrics cache miss, calling provider");
        match self.client.fetch(title, artist).await {
            Ok(text) => {
                self.cache.put(key, CachedLyrics::Found(text.clone()));
                Ok(text)
            }
            Err(err @ LookupError::NotFound { .. }) => {
                self.cache.put(key, CachedLyrics::NotFound);
                Err(err)
            }
            // Provider faults are transient: leave the cache alone so the
            // next lookup retries the provider
            Err(err) => Err(err),
        }
    }

    /// Number of memoized lookups
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
