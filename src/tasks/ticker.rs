//! Status Ticker Task
//!
//! Periodic task that triggers volume info refreshes while the status
//! display is visible and the owning window is in the foreground.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::context::ActiveContext;
use crate::refresh::VolumeInfoRefresher;

// == Running State ==
/// Handle and stop signal of a spawned ticker.
struct Running {
    /// Closing/sending on this channel wakes the loop and stops it
    shutdown: watch::Sender<bool>,
    /// Join handle of the ticker task
    handle: JoinHandle<()>,
}

// == Status Display Driver ==
/// Owns the lifecycle of the periodic volume info ticker.
///
/// One driver exists per display instance. `start` is idempotent: calling
/// it while the ticker runs is a no-op. `stop` signals the loop over a
/// watch channel instead of nulling a shared field, so there is no race
/// between the stopping thread and the loop's own visibility check. The
/// loop also stops by itself when it wakes and finds the display hidden or
/// the owning window disposed.
///
/// Each tick refreshes only when all gates hold: display visible, window
/// foregrounded, no navigation in progress. The refresh itself usually hits
/// the cache and issues no I/O.
pub struct StatusDisplayDriver {
    refresher: Arc<VolumeInfoRefresher>,
    ctx: Arc<dyn ActiveContext>,
    period: Duration,
    running: Mutex<Option<Running>>,
}

impl StatusDisplayDriver {
    // == Constructor ==
    /// Creates a driver ticking every `period`. Nothing runs until `start`.
    pub fn new(
        refresher: Arc<VolumeInfoRefresher>,
        ctx: Arc<dyn ActiveContext>,
        period: Duration,
    ) -> Self {
        Self {
            refresher,
            ctx,
            period,
            running: Mutex::new(None),
        }
    }

    // == Start ==
    /// Spawns the ticker task if it is not already running.
    ///
    /// Called when the display becomes visible. Must be called from within
    /// a tokio runtime.
    pub fn start(&self) {
        let mut running = self.lock_running();

        if let Some(r) = running.as_ref() {
            if !r.handle.is_finished() {
                debug!("status ticker already running");
                return;
            }
        }

        let (shutdown, mut stop_rx) = watch::channel(false);
        let refresher = Arc::clone(&self.refresher);
        let ctx = Arc::clone(&self.ctx);
        let period = self.period;

        let handle = tokio::spawn(async move {
            info!(period_ms = period.as_millis() as u64, "status ticker started");

            loop {
                tokio::select! {
                    _ = tokio::time::sleep(period) => {}
                    _ = stop_rx.changed() => {
                        info!("status ticker stopped");
                        break;
                    }
                }

                // Continuation check: exit instead of rescheduling once the
                // display is hidden or the owning window is gone.
                if !ctx.is_owner_window_open() || !ctx.is_display_visible() {
                    info!("status ticker exiting, display no longer shown");
                    break;
                }

                if ctx.is_foreground() && !ctx.is_navigation_in_progress() {
                    if let Some(volume) = ctx.current_volume() {
                        refresher.ensure_fresh(volume);
                    }
                } else {
                    debug!("status tick skipped, window backgrounded or navigating");
                }
            }
        });

        *running = Some(Running { shutdown, handle });
    }

    // == Stop ==
    /// Signals the ticker to stop. Safe to call when nothing is running.
    ///
    /// Called when the display is hidden. The task wakes on the signal and
    /// exits without a further tick.
    pub fn stop(&self) {
        if let Some(r) = self.lock_running().take() {
            // Receiver may already be gone if the loop exited on its own
            let _ = r.shutdown.send(true);
        }
    }

    // == Is Running ==
    /// True while a spawned ticker task has not finished.
    pub fn is_running(&self) -> bool {
        self.lock_running()
            .as_ref()
            .map(|r| !r.handle.is_finished())
            .unwrap_or(false)
    }

    fn lock_running(&self) -> std::sync::MutexGuard<'_, Option<Running>> {
        self.running.lock().unwrap_or_else(|e| e.into_inner())
    }
}
