use crate::particle::Viewport;
use std::time::Duration;

/// Coalesces bursts of resize events. Only the most recent viewport is
/// delivered, once no new request has arrived for the quiet window.
///
/// Time is passed in by the caller (elapsed since some fixed origin), so the
/// debouncer has no clock of its own and is polled from the frame loop.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(Viewport, Duration)>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn request(&mut self, viewport: Viewport, now: Duration) {
        self.pending = Some((viewport, now + self.quiet));
    }

    pub fn poll(&mut self, now: Duration) -> Option<Viewport> {
        match self.pending {
            Some((viewport, deadline)) if now >= deadline => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
