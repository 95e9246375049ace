//! Cache Module
//!
//! Provides the bounded volume info cache with TTL expiration and LRU
//! eviction. Retrieving free/total space is expensive (I/O bound, possibly
//! over the network), so snapshots are kept for a short while and reused.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::VolumeInfoCache;

// == Public Constants ==
/// Default number of volume snapshots kept at once
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Default number of milliseconds before a cached snapshot expires
pub const DEFAULT_TTL_MS: u64 = 60_000;
