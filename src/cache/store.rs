//! Volume Info Cache Module
//!
//! Bounded cache of per-volume free/total space snapshots, combining HashMap
//! storage with LRU eviction and TTL expiration behind a single lock.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::config::Config;
use crate::models::VolumeSpace;

// == Inner State ==
/// Everything guarded by the cache lock.
#[derive(Debug)]
struct CacheInner {
    /// Volume key to snapshot entry
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
}

// == Volume Info Cache ==
/// Bounded, TTL-expiring cache of volume space snapshots.
///
/// Owned by (or injected into) the status display instance rather than being
/// process-global, so each window carries its own cache and tests get
/// isolation for free.
///
/// # Concurrency
///
/// All methods take `&self`; the internal state is serialized through one
/// `std::sync::Mutex`. Contention is low (one entry touched at a time) and
/// the lock is never held across I/O, so the cache is safe to call from the
/// ticker task, refresh tasks and the UI thread alike.
#[derive(Debug)]
pub struct VolumeInfoCache {
    inner: Mutex<CacheInner>,
    /// Maximum number of entries held at once
    capacity: usize,
    /// Lifetime of a snapshot from insertion
    ttl: Duration,
}

impl VolumeInfoCache {
    // == Constructor ==
    /// Creates a new cache with the given capacity and snapshot TTL.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                lru: LruTracker::new(),
                stats: CacheStats::new(),
            }),
            capacity,
            ttl,
        }
    }

    /// Creates a cache from a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_capacity, config.ttl())
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        // A panic while holding the lock leaves the state consistent enough
        // to keep serving; recover instead of propagating the poison.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    // == Get ==
    /// Returns a copy of the cached snapshot for `key` if present and not
    /// expired.
    ///
    /// An expired entry is lazily dropped and reported as a miss; a fresh
    /// hit marks the key as most recently used.
    pub fn get(&self, key: &str) -> Option<VolumeSpace> {
        let mut inner = self.lock();

        if let Some(entry) = inner.entries.get(key) {
            if entry.is_expired() {
                debug!(%key, "cached volume info expired");
                inner.entries.remove(key);
                inner.lru.remove(key);
                let count = inner.entries.len();
                inner.stats.set_total_entries(count);
                inner.stats.record_miss();
                return None;
            }

            let space = entry.space;
            inner.stats.record_hit();
            inner.lru.touch(key);
            debug!(%key, "volume info cache hit");
            Some(space)
        } else {
            inner.stats.record_miss();
            None
        }
    }

    // == Put ==
    /// Inserts or overwrites the snapshot for `key` with a fresh timestamp.
    ///
    /// When inserting a new key at capacity, the least recently used entry
    /// is evicted first (insertion order breaks ties among untouched keys).
    pub fn put(&self, key: &str, space: VolumeSpace) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.lock();

        let is_overwrite = inner.entries.contains_key(key);
        if !is_overwrite && inner.entries.len() >= self.capacity {
            if let Some(evicted) = inner.lru.pop_lru() {
                debug!(key = %evicted, "evicting least recently used volume");
                inner.entries.remove(&evicted);
                inner.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(space, self.ttl);
        inner.entries.insert(key.to_string(), entry);
        inner.lru.touch(key);
        let count = inner.entries.len();
        inner.stats.set_total_entries(count);
        debug!(%key, total = space.total_bytes, free = space.free_bytes, "cached volume info");
    }

    // == Clear All ==
    /// Removes every entry unconditionally. Used to force fresh reads on a
    /// user-initiated refresh.
    pub fn clear_all(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.lru.clear();
        inner.stats.set_total_entries(0);
        debug!("volume info cache cleared");
    }

    // == Cleanup Expired ==
    /// Sweeps out every expired entry, returning the number removed.
    ///
    /// Expiration is otherwise lazy (checked on read); this exists for
    /// housekeeping when the cache sits idle on rarely revisited volumes.
    pub fn cleanup_expired(&self) -> usize {
        let mut inner = self.lock();

        let expired: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            inner.entries.remove(key);
            inner.lru.remove(key);
        }
        let count = inner.entries.len();
        inner.stats.set_total_entries(count);
        expired.len()
    }

    // == Record Refresh ==
    /// Records the outcome of a completed background refresh.
    pub(crate) fn record_refresh(&self, failed: bool) {
        self.lock().stats.record_refresh(failed);
    }

    // == Accessors ==
    /// Current number of entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// True when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    /// The configured snapshot TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
