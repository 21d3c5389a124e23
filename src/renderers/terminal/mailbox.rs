use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// Single-slot handoff from the render thread to the display loop.
///
/// Holds at most one unread frame. Publishing never blocks on the reader: a newer frame
/// simply replaces the pending one, which is counted as dropped.
#[derive(Default)]
pub struct FrameMailbox {
    slot: Mutex<Option<Arc<str>>>,
    ready: Condvar,
    published: AtomicU64,
    dropped: AtomicU64,
}

impl FrameMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, frame: String) {
        let frame: Arc<str> = frame.into();
        {
            let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
            if slot.replace(frame).is_some() {
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.published.fetch_add(1, Ordering::Relaxed);
        self.ready.notify_one();
    }

    /// Newest unread frame, if any. Never waits.
    pub fn take_latest(&self) -> Option<Arc<str>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).take()
    }

    /// Like [`FrameMailbox::take_latest`], but waits up to `timeout` for a frame to arrive.
    pub fn wait_latest(&self, timeout: Duration) -> Option<Arc<str>> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        let (mut slot, _) = self
            .ready
            .wait_timeout_while(slot, timeout, |frame| frame.is_none())
            .unwrap_or_else(|e| e.into_inner());
        slot.take()
    }

    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }

    /// Frames replaced before anyone read them.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
