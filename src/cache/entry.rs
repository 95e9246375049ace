//! Cache Entry Module
//!
//! Defines the structure for individual cached volume snapshots with TTL
//! support.

use std::time::{Duration, Instant};

use crate::models::VolumeSpace;

// == Cache Entry ==
/// A single cached volume snapshot with its insertion and expiry instants.
///
/// Entries are owned exclusively by the cache; callers always receive copies
/// of the contained [`VolumeSpace`], never references into the cache.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached free/total space snapshot
    pub space: VolumeSpace,
    /// When the snapshot was inserted
    pub inserted_at: Instant,
    /// When the snapshot stops being served
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` after now.
    pub fn new(space: VolumeSpace, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            space,
            inserted_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once its age reaches the TTL,
    /// i.e. when the current instant is greater than or equal to the expiry
    /// instant. At TTL - 1ms the entry is still served; at TTL it is not.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Age ==
    /// Time elapsed since insertion.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    // == Time To Live ==
    /// Remaining time until expiry, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
