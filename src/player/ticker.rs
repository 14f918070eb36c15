//! Position sampling on a fixed cadence.
//!
//! Replaces a self-rescheduling callback with an explicit scheduled task: the
//! ticker carries a cancellation token that is checked before every
//! reschedule, and it stops on its own as soon as playback is not active. The
//! player thread re-spawns it whenever playback (re)starts and drops it on
//! pause, stop and quit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::types::PlaybackHandle;

/// Interval between position samples while playing.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct PositionTicker {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PositionTicker {
    /// Spawn a ticker that bumps `playback.elapsed` by `interval` per tick
    /// while playback is active.
    pub fn spawn(playback: PlaybackHandle, interval: Duration) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let token = cancel.clone();
        let handle = thread::spawn(move || {
            loop {
                thread::sleep(interval);
                // Checked before each reschedule so a tick never fires after
                // the owning session is gone.
                if token.load(Ordering::Relaxed) {
                    break;
                }
                let Ok(mut info) = playback.lock() else {
                    break;
                };
                if !info.playing {
                    break;
                }
                info.elapsed += interval;
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Set the cancellation token. The ticker thread exits at its next tick;
    /// it is not joined, so teardown never blocks for a full interval.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

impl Drop for PositionTicker {
    fn drop(&mut self) {
        self.cancel();
        // Detached on purpose; the thread ends at its next tick.
        drop(self.handle.take());
    }
}
