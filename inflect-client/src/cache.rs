//! Caching layer for inflection lookups.
//!
//! Successful lookups are kept for the life of the cache: there is no TTL
//! and no capacity bound, and an entry is only dropped by an explicit
//! [`CachedInflectionClient::reset_cache`]. Failed requests are never
//! cached, so the next lookup for the same word goes back to the network.

use std::sync::Arc;

use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::domain::{Case, InflectionSet};
use crate::inflection::{InflectionClient, InflectionEntry, ParsedResponse};

/// Cached inflection set.
type Entry = Arc<InflectionSet>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Number of words to pre-allocate room for.
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
        }
    }
}

/// In-memory word → inflection set store.
pub struct InflectionCache {
    sets: MokaCache<String, Entry>,
}

impl InflectionCache {
    /// Create an empty cache.
    pub fn new(config: &CacheConfig) -> Self {
        let sets = MokaCache::builder()
            .initial_capacity(config.initial_capacity)
            .build();

        Self { sets }
    }

    /// Get the cached set for `word`.
    pub async fn get(&self, word: &str) -> Option<Entry> {
        self.sets.get(word).await
    }

    /// Store the set for `word` unless one is already cached.
    ///
    /// Returns whichever set ends up cached, so racing writers all see the
    /// first one stored.
    pub async fn get_or_insert(&self, word: &str, entry: Entry) -> Entry {
        self.sets.entry_by_ref(word).or_insert(entry).await.into_value()
    }

    /// Number of cached words.
    ///
    /// Flushes pending maintenance first so the count reflects recent
    /// inserts and invalidations.
    pub async fn entry_count(&self) -> u64 {
        self.sets.run_pending_tasks().await;
        self.sets.entry_count()
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.sets.invalidate_all();
    }
}

/// Inflection client with caching.
///
/// This is the entry point callers use. [`lookup`](Self::lookup) always
/// returns a six-slot set; failures degrade to the word repeated in every
/// slot rather than an error.
pub struct CachedInflectionClient {
    client: InflectionClient,
    cache: InflectionCache,
}

impl CachedInflectionClient {
    /// Create a new cached client.
    pub fn new(client: InflectionClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: InflectionCache::new(cache_config),
        }
    }

    /// Get the six inflected forms of `word`, using the cache if possible.
    ///
    /// | service reply             | result                    | cached |
    /// |---------------------------|---------------------------|--------|
    /// | list of inflections       | forms by case, `""` gaps  | yes    |
    /// | single echoed record      | `word` in every slot      | yes    |
    /// | no inflections / error    | `word` in every slot      | no     |
    pub async fn lookup(&self, word: &str) -> Arc<InflectionSet> {
        if let Some(cached) = self.cache.get(word).await {
            debug!(word, "inflection cache hit");
            return cached;
        }

        let set = match self.client.fetch(word).await {
            Ok(ParsedResponse::NotFound { .. }) => {
                debug!(word, "word not in dictionary");
                InflectionSet::filled(word)
            }
            Ok(ParsedResponse::FoundList { entries, .. }) => place_entries(word, &entries),
            Ok(ParsedResponse::Malformed) => {
                warn!(word, "response had no inflections, using word as-is");
                return Arc::new(InflectionSet::filled(word));
            }
            Err(e) => {
                warn!(word, error = %e, "inflection request failed, using word as-is");
                return Arc::new(InflectionSet::filled(word));
            }
        };

        self.cache.get_or_insert(word, Arc::new(set)).await
    }

    /// Peek at the cached set for `word` without touching the network.
    pub async fn cached(&self, word: &str) -> Option<Arc<InflectionSet>> {
        self.cache.get(word).await
    }

    /// Clear every cached entry.
    pub fn reset_cache(&self) {
        self.cache.invalidate_all();
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &InflectionClient {
        &self.client
    }

    /// Get cache statistics.
    pub async fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count().await
    }
}

/// Place each entry's text at its case slot.
///
/// Later entries for the same case replace earlier ones. Entries whose case
/// is not a number in 1..=6 are dropped.
fn place_entries(word: &str, entries: &[InflectionEntry]) -> InflectionSet {
    let mut set = InflectionSet::empty();

    for entry in entries {
        match Case::parse(&entry.case) {
            Ok(case) => set.set(case, entry.text.as_str()),
            Err(e) => warn!(word, text = %entry.text, error = %e, "dropping inflection"),
        }
    }

    set
}
