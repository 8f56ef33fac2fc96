//! Bounded resolution cache.
//!
//! Callers that resolve the same sentences repeatedly (batch reports,
//! board comparisons) can hold one of these per session. The cache is an
//! explicit object handed to the call site, never ambient process state, and
//! evicts oldest-first once the configured capacity is reached.

use std::collections::VecDeque;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::sentence::resolver::{SentenceResolution, SentenceResolver};
use crate::table::Technique;

/// Configuration for [`ResolutionCache`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached resolutions; 0 disables caching.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig { capacity: 1000 }
    }
}

type CacheKey = (String, Technique);

/// A bounded, oldest-first cache of sentence resolutions keyed by
/// (normalized sentence, technique).
#[derive(Debug, Default)]
pub struct ResolutionCache {
    config: CacheConfig,
    entries: AHashMap<CacheKey, SentenceResolution>,
    order: VecDeque<CacheKey>,
}

impl ResolutionCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache with a custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        ResolutionCache {
            config,
            entries: AHashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Look up a cached resolution.
    pub fn get(&self, sentence: &str, technique: Technique) -> Option<&SentenceResolution> {
        let key = (sentence.trim().to_lowercase(), technique);
        self.entries.get(&key)
    }

    /// Insert a resolution, evicting the oldest entries past capacity.
    pub fn put(&mut self, resolution: SentenceResolution) {
        if self.config.capacity == 0 {
            return;
        }
        let key = (resolution.sentence.clone(), resolution.technique);
        if self.entries.insert(key.clone(), resolution).is_none() {
            self.order.push_back(key);
            while self.order.len() > self.config.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
        }
    }

    /// Resolve through the cache, computing and storing on a miss.
    pub fn resolve(
        &mut self,
        resolver: &SentenceResolver<'_>,
        sentence: &str,
        technique: Technique,
    ) -> SentenceResolution {
        if let Some(hit) = self.get(sentence, technique) {
            return hit.clone();
        }
        let resolution = resolver.resolve(sentence, technique);
        self.put(resolution.clone());
        resolution
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }
}
