//! Event recorders for cache diagnostics.
//!
//! [`TracingRecorder`] is the default and turns every event into a `tracing`
//! record. [`MemoryRecorder`] keeps events in memory so hosts and tests can
//! inspect exactly what the cache did.

use bridge_traits::playback::{EventRecorder, PlaybackEvent};
use parking_lot::Mutex;
use tracing::debug;

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl EventRecorder for TracingRecorder {
    fn record(&self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::Created { path } => {
                debug!(path = %path, "created audio");
            }
            PlaybackEvent::Played { path, at_ms } => {
                debug!(path = %path, at_ms = *at_ms, "played");
            }
            PlaybackEvent::Throttled { path, remaining_ms } => {
                debug!(path = %path, remaining_ms = *remaining_ms, "play throttled");
            }
        }
    }
}

/// Collects events in insertion order.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    events: Mutex<Vec<PlaybackEvent>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<PlaybackEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Number of recorded events of the given kind (`"created"`, `"played"`,
    /// `"throttled"`).
    pub fn count(&self, kind: &str) -> usize {
        self.events.lock().iter().filter(|e| e.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventRecorder for MemoryRecorder {
    fn record(&self, event: &PlaybackEvent) {
        self.events.lock().push(event.clone());
    }
}
