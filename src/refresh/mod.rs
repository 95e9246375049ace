//! Volume Info Refresher Module
//!
//! Issues background queries for a volume's free/total space on cache
//! misses and publishes results to the display layer.
//!
//! Queries may block on file-system or network I/O, so they run on the
//! blocking thread pool and never on the caller's thread. Concurrent
//! requests for the same volume collapse into a single query.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::cache::VolumeInfoCache;
use crate::models::{VolumeSpace, VolumeSpaceUpdate, UNKNOWN_BYTES};
use crate::volume::Volume;

// == Volume Info Refresher ==
/// Cache-backed, single-flight refresher for volume space snapshots.
///
/// `ensure_fresh` is the hot path called on every status tick: a cache hit
/// publishes immediately without I/O, a miss schedules exactly one
/// background query per volume key. Query failures are absorbed into
/// unknown (-1) values that are cached like any other result, so a broken
/// volume is retried at most once per TTL.
pub struct VolumeInfoRefresher {
    /// Shared snapshot cache, owned by the display component
    cache: Arc<VolumeInfoCache>,
    /// Keys with a query currently in flight
    in_flight: Arc<Mutex<HashSet<String>>>,
    /// Key of the volume the display currently shows; guards stale results
    active_key: Arc<Mutex<Option<String>>>,
    /// Hand-off channel to the display layer
    publisher: UnboundedSender<VolumeSpaceUpdate>,
}

impl VolumeInfoRefresher {
    // == Constructor ==
    /// Creates a refresher over the given cache, publishing updates on
    /// `publisher`. The display layer owns the receiving end.
    pub fn new(cache: Arc<VolumeInfoCache>, publisher: UnboundedSender<VolumeSpaceUpdate>) -> Self {
        Self {
            cache,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            active_key: Arc::new(Mutex::new(None)),
            publisher,
        }
    }

    // == Ensure Fresh ==
    /// Publishes the cached snapshot for `volume` if fresh, otherwise
    /// schedules one asynchronous query and returns without blocking.
    ///
    /// While a query for the same key is in flight, further calls are
    /// coalesced into it (observed as a no-op beyond the first). Must be
    /// called from within a tokio runtime.
    pub fn ensure_fresh(&self, volume: Arc<dyn Volume>) {
        let key = volume.key();
        *lock(&self.active_key) = Some(key.clone());

        if let Some(space) = self.cache.get(&key) {
            publish(&self.publisher, &key, space);
            return;
        }

        if !lock(&self.in_flight).insert(key.clone()) {
            debug!(%key, "volume query already in flight, coalescing");
            return;
        }

        let cache = Arc::clone(&self.cache);
        let in_flight = Arc::clone(&self.in_flight);
        let active_key = Arc::clone(&self.active_key);
        let publisher = self.publisher.clone();

        tokio::task::spawn_blocking(move || {
            let space = query_volume_space(volume.as_ref());

            cache.put(&key, space);
            cache.record_refresh(!space.is_total_known() || !space.is_free_known());
            lock(&in_flight).remove(&key);

            // The display may have moved to another volume while the query
            // ran; a result for a key it no longer shows is dropped.
            if lock(&active_key).as_deref() == Some(key.as_str()) {
                publish(&publisher, &key, space);
            } else {
                debug!(%key, "dropping stale volume info result");
            }
        });
    }

    // == Manual Refresh ==
    /// Clears the whole cache and forces an immediate refresh of `volume`.
    /// Bound to direct user interaction (e.g. clicking the volume label).
    pub fn request_manual_refresh(&self, volume: Arc<dyn Volume>) {
        self.cache.clear_all();
        self.ensure_fresh(volume);
    }

    /// The cache backing this refresher.
    pub fn cache(&self) -> &Arc<VolumeInfoCache> {
        &self.cache
    }
}

// == Query ==
/// Reads free and total space from the volume, substituting -1 for each
/// quantity that fails to resolve. Errors never escape this function.
fn query_volume_space(volume: &dyn Volume) -> VolumeSpace {
    let free = match volume.free_space() {
        Ok(bytes) => i64::try_from(bytes).unwrap_or(i64::MAX),
        Err(e) => {
            warn!(key = %volume.key(), error = %e, "free space query failed");
            UNKNOWN_BYTES
        }
    };

    let total = match volume.total_space() {
        Ok(bytes) => i64::try_from(bytes).unwrap_or(i64::MAX),
        Err(e) => {
            warn!(key = %volume.key(), error = %e, "total space query failed");
            UNKNOWN_BYTES
        }
    };

    VolumeSpace::new(total, free)
}

// == Publish ==
/// Hands a snapshot to the display layer. A closed receiver only means the
/// display went away; not worth more than a debug line.
fn publish(publisher: &UnboundedSender<VolumeSpaceUpdate>, key: &str, space: VolumeSpace) {
    if publisher
        .send(VolumeSpaceUpdate::new(key, space))
        .is_err()
    {
        debug!(%key, "display receiver closed, dropping volume info update");
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
