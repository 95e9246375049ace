//! Integration Tests for the Volume Info Core
//!
//! Exercises the full stack: cache, refresher and ticker driver wired
//! together with mock volumes and a mock active context, the way a status
//! bar would assemble them.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use volinfo::cache::VolumeInfoCache;
use volinfo::context::ActiveContext;
use volinfo::error::Result;
use volinfo::models::{VolumeSpace, VolumeSpaceUpdate};
use volinfo::volume::Volume;
use volinfo::{Config, StatusDisplayDriver, VolumeInfoRefresher};

// == Mock Collaborators ==

struct MockVolume {
    key: String,
    total: Option<u64>,
    free: Option<u64>,
    query_delay: Duration,
    queries: AtomicUsize,
}

impl MockVolume {
    fn healthy(key: &str, total: u64, free: u64) -> Self {
        Self {
            key: key.to_string(),
            total: Some(total),
            free: Some(free),
            query_delay: Duration::ZERO,
            queries: AtomicUsize::new(0),
        }
    }

    fn unreachable(key: &str) -> Self {
        Self {
            key: key.to_string(),
            total: None,
            free: None,
            query_delay: Duration::ZERO,
            queries: AtomicUsize::new(0),
        }
    }

    fn slow(mut self, delay: Duration) -> Self {
        self.query_delay = delay;
        self
    }

    fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Volume for MockVolume {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn free_space(&self) -> Result<u64> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.query_delay);
        self.free.ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "share offline").into()
        })
    }

    fn total_space(&self) -> Result<u64> {
        self.total.ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "share offline").into()
        })
    }
}

struct MockContext {
    visible: AtomicBool,
    foreground: AtomicBool,
    navigating: AtomicBool,
    window_open: AtomicBool,
    volume: Arc<MockVolume>,
}

impl MockContext {
    fn showing(volume: Arc<MockVolume>) -> Self {
        Self {
            visible: AtomicBool::new(true),
            foreground: AtomicBool::new(true),
            navigating: AtomicBool::new(false),
            window_open: AtomicBool::new(true),
            volume,
        }
    }
}

impl ActiveContext for MockContext {
    fn is_display_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    fn is_foreground(&self) -> bool {
        self.foreground.load(Ordering::SeqCst)
    }

    fn is_navigation_in_progress(&self) -> bool {
        self.navigating.load(Ordering::SeqCst)
    }

    fn is_owner_window_open(&self) -> bool {
        self.window_open.load(Ordering::SeqCst)
    }

    fn current_volume(&self) -> Option<Arc<dyn Volume>> {
        Some(self.volume.clone())
    }
}

// == Helper Functions ==

/// Opt-in log output for debugging test runs, e.g. RUST_LOG=volinfo=debug.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "volinfo=info".into()))
        .with_test_writer()
        .try_init();
}

fn build_refresher(
    capacity: usize,
    ttl: Duration,
) -> (
    Arc<VolumeInfoRefresher>,
    mpsc::UnboundedReceiver<VolumeSpaceUpdate>,
) {
    init_tracing();
    let cache = Arc::new(VolumeInfoCache::new(capacity, ttl));
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(VolumeInfoRefresher::new(cache, tx)), rx)
}

// == Refresher End-To-End Tests ==

#[tokio::test]
async fn test_tick_miss_then_hit_uses_one_query() {
    let (refresher, mut rx) = build_refresher(50, Duration::from_secs(60));
    let volume = Arc::new(MockVolume::healthy("/mnt/data", 10_000, 2_500));

    // First tick: miss, query, publish
    refresher.ensure_fresh(volume.clone());
    let update = rx.recv().await.unwrap();
    assert_eq!(update.key, "/mnt/data");
    assert_eq!(update.space, VolumeSpace::new(10_000, 2_500));

    // Second tick within the TTL: served from cache
    refresher.ensure_fresh(volume.clone());
    let update = rx.recv().await.unwrap();
    assert_eq!(update.space, VolumeSpace::new(10_000, 2_500));
    assert_eq!(volume.query_count(), 1);
}

#[tokio::test]
async fn test_concurrent_ensure_fresh_single_query() {
    let (refresher, mut rx) = build_refresher(50, Duration::from_secs(60));
    let volume = Arc::new(
        MockVolume::healthy("/mnt/nfs", 1_000_000, 600_000).slow(Duration::from_millis(80)),
    );

    // Fire from several tasks at once, as the ticker and a UI click would
    let mut handles = Vec::new();
    for _ in 0..8 {
        let refresher = Arc::clone(&refresher);
        let volume = volume.clone();
        handles.push(tokio::spawn(async move {
            refresher.ensure_fresh(volume);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let update = rx.recv().await.unwrap();
    assert_eq!(update.space, VolumeSpace::new(1_000_000, 600_000));
    assert_eq!(volume.query_count(), 1, "overlapping refreshes must coalesce");
}

#[tokio::test]
async fn test_offline_share_displays_unknown() {
    let (refresher, mut rx) = build_refresher(50, Duration::from_secs(60));
    let volume = Arc::new(MockVolume::unreachable("/mnt/offline"));

    refresher.ensure_fresh(volume.clone());

    // The display still gets a value to render ("-") instead of an error
    let update = rx.recv().await.unwrap();
    assert_eq!(update.space, VolumeSpace::unknown());

    // And re-ticking within the TTL does not hit the dead share again
    refresher.ensure_fresh(volume.clone());
    rx.recv().await.unwrap();
    assert_eq!(volume.query_count(), 1);
}

#[tokio::test]
async fn test_manual_refresh_bypasses_ttl() {
    let (refresher, mut rx) = build_refresher(50, Duration::from_secs(60));
    let volume = Arc::new(MockVolume::healthy("/mnt/data", 10_000, 2_500));

    refresher.ensure_fresh(volume.clone());
    rx.recv().await.unwrap();

    // User clicks the volume label: cache is flushed and re-queried
    refresher.request_manual_refresh(volume.clone());
    rx.recv().await.unwrap();
    assert_eq!(volume.query_count(), 2);
}

// == Driver End-To-End Tests ==

#[tokio::test]
async fn test_driver_publishes_periodically() {
    let volume = Arc::new(MockVolume::healthy("/mnt/data", 10_000, 2_500));
    let ctx = Arc::new(MockContext::showing(volume.clone()));

    let (refresher, mut rx) = build_refresher(50, Duration::from_secs(60));
    let driver = StatusDisplayDriver::new(refresher, ctx, Duration::from_millis(25));

    driver.start();

    // Several ticks worth of updates; only the first needed a real query
    for _ in 0..3 {
        let update = rx.recv().await.unwrap();
        assert_eq!(update.key, "/mnt/data");
    }
    assert_eq!(volume.query_count(), 1);

    driver.stop();
}

#[tokio::test]
async fn test_driver_stops_when_hidden() {
    let volume = Arc::new(MockVolume::healthy("/mnt/data", 10_000, 2_500));
    let ctx = Arc::new(MockContext::showing(volume));

    let (refresher, _rx) = build_refresher(50, Duration::from_secs(60));
    let driver = StatusDisplayDriver::new(refresher, ctx.clone(), Duration::from_millis(20));

    driver.start();
    assert!(driver.is_running());

    // Hiding the status bar lets the ticker terminate on its next wake
    ctx.visible.store(false, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(120)).await;

    assert!(!driver.is_running());
}

#[tokio::test]
async fn test_driver_skips_ticks_during_navigation() {
    let volume = Arc::new(MockVolume::healthy("/mnt/data", 10_000, 2_500));
    let ctx = Arc::new(MockContext::showing(volume.clone()));
    ctx.navigating.store(true, Ordering::SeqCst);

    let (refresher, mut rx) = build_refresher(50, Duration::from_secs(60));
    let driver = StatusDisplayDriver::new(refresher, ctx.clone(), Duration::from_millis(20));

    driver.start();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(volume.query_count(), 0);

    // Navigation finishes: ticks resume on the same running ticker
    ctx.navigating.store(false, Ordering::SeqCst);
    let update = rx.recv().await.unwrap();
    assert_eq!(update.key, "/mnt/data");

    driver.stop();
}

// == Config Wiring Test ==

#[tokio::test]
async fn test_cache_from_config() {
    let config = Config {
        cache_capacity: 2,
        ttl_ms: 60_000,
        update_period_ms: 60_000,
    };
    let cache = VolumeInfoCache::from_config(&config);

    cache.put("/vol/a", VolumeSpace::new(1, 1));
    cache.put("/vol/b", VolumeSpace::new(2, 2));
    cache.put("/vol/c", VolumeSpace::new(3, 3));

    // Capacity from config: A was evicted, B and C survive
    assert_eq!(cache.get("/vol/a"), None);
    assert!(cache.get("/vol/b").is_some());
    assert!(cache.get("/vol/c").is_some());
    assert_eq!(cache.ttl(), Duration::from_secs(60));
}
