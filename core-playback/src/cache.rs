//! # Playback Cache
//!
//! Keeps one [`PlaybackHandle`] per resource path and decides, per trigger,
//! whether a sound actually plays.
//!
//! - `acquire` returns the cached handle for a path, creating the native
//!   element through the injected factory the first time a path is seen.
//! - `trigger` rewinds and plays a handle. With throttling requested, a play
//!   that lands within the throttle window of the previous accepted play on
//!   the same handle is suppressed.
//!
//! Entries live as long as the cache; there is no eviction.

use crate::error::{PlaybackError, Result};
use crate::events::TracingRecorder;
use crate::handle::{cooldown_remaining, PlaybackHandle};
use bridge_traits::playback::{AudioElementFactory, EventRecorder, PlaybackEvent};
use bridge_traits::time::MonotonicClock;
use core_runtime::config::CoreConfig;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, warn};

/// Result of a [`PlaybackCache::trigger`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerOutcome {
    /// The element was rewound and asked to play at `at_ms`.
    Played { at_ms: f64 },
    /// The trigger was suppressed; the handle accepts throttled plays again
    /// after `remaining_ms`.
    Throttled { remaining_ms: f64 },
}

impl TriggerOutcome {
    pub fn played(&self) -> bool {
        matches!(self, TriggerOutcome::Played { .. })
    }

    pub fn throttled(&self) -> bool {
        matches!(self, TriggerOutcome::Throttled { .. })
    }
}

/// Path-keyed cache of playback handles with per-handle throttling.
pub struct PlaybackCache {
    handles: Mutex<HashMap<String, Arc<PlaybackHandle>>>,
    factory: Arc<dyn AudioElementFactory>,
    clock: Arc<dyn MonotonicClock>,
    recorder: Arc<dyn EventRecorder>,
    throttle_window_ms: f64,
    throttle_window: Duration,
}

impl PlaybackCache {
    /// Create an empty cache.
    ///
    /// `config` is validated again here since its fields are public. Without
    /// an event recorder, events go to `tracing`.
    pub fn new(config: CoreConfig) -> Result<Self> {
        let throttle_window = config.throttle_window()?;
        let recorder = config
            .event_recorder
            .unwrap_or_else(|| Arc::new(TracingRecorder));

        Ok(Self {
            handles: Mutex::new(HashMap::new()),
            factory: config.audio_factory,
            clock: config.clock,
            recorder,
            throttle_window_ms: config.throttle_window_ms,
            throttle_window,
        })
    }

    /// Return the handle for `path`, creating it on first use.
    ///
    /// The same `Arc` is returned for every later call with an equal path.
    /// If the factory fails nothing is cached and the next call retries.
    #[instrument(skip(self), level = "trace")]
    pub fn acquire(&self, path: &str) -> Result<Arc<PlaybackHandle>> {
        if path.is_empty() {
            return Err(PlaybackError::EmptyPath);
        }

        // Held across create so two callers cannot both build an element.
        let mut handles = self.handles.lock();
        if let Some(handle) = handles.get(path) {
            return Ok(Arc::clone(handle));
        }

        let element = self.factory.create(path).map_err(|e| {
            warn!(path, error = %e, "Failed to create audio element");
            e
        })?;

        let handle = Arc::new(PlaybackHandle::new(path, element));
        handles.insert(path.to_string(), Arc::clone(&handle));
        drop(handles);

        self.recorder.record(&PlaybackEvent::Created {
            path: path.to_string(),
        });
        Ok(handle)
    }

    /// Rewind and play `handle`, honoring the throttle window when `throttle`
    /// is set.
    ///
    /// A throttled trigger changes nothing and is not an error. An accepted
    /// trigger records its timestamp before touching the element, so a play
    /// that fails still counts toward the window.
    #[instrument(skip(self, handle), fields(path = %handle.path()), level = "trace")]
    pub fn trigger(&self, handle: &PlaybackHandle, throttle: bool) -> Result<TriggerOutcome> {
        let now = {
            let mut state = handle.state().lock();
            let now = self.clock.now_millis();

            if throttle {
                if let Some(remaining_ms) =
                    cooldown_remaining(state.last_ms, now, self.throttle_window_ms)
                {
                    drop(state);
                    self.recorder.record(&PlaybackEvent::Throttled {
                        path: handle.path().to_string(),
                        remaining_ms,
                    });
                    return Ok(TriggerOutcome::Throttled { remaining_ms });
                }
            }

            state.last_ms = now;
            state.plays += 1;
            now
        };

        self.recorder.record(&PlaybackEvent::Played {
            path: handle.path().to_string(),
            at_ms: now,
        });

        let element = handle.element();
        element.reset_position()?;
        element.play()?;

        Ok(TriggerOutcome::Played { at_ms: now })
    }

    /// Cached handle for `path`, without creating one.
    pub fn get(&self, path: &str) -> Option<Arc<PlaybackHandle>> {
        self.handles.lock().get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.handles.lock().contains_key(path)
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.handles.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.lock().is_empty()
    }

    /// Cached paths in sorted order.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.handles.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn throttle_window_ms(&self) -> f64 {
        self.throttle_window_ms
    }

    pub fn throttle_window(&self) -> Duration {
        self.throttle_window
    }
}

impl fmt::Debug for PlaybackCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackCache")
            .field("handles", &self.len())
            .field("throttle_window_ms", &self.throttle_window_ms)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MemoryRecorder;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::{AudioElement, BridgeError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingElement {
        plays: AtomicUsize,
    }

    impl AudioElement for CountingElement {
        fn reset_position(&self) -> BridgeResult<()> {
            Ok(())
        }

        fn play(&self) -> BridgeResult<()> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingFactory {
        created: AtomicUsize,
    }

    impl AudioElementFactory for CountingFactory {
        fn create(&self, path: &str) -> BridgeResult<Arc<dyn AudioElement>> {
            if path.ends_with(".missing") {
                return Err(BridgeError::ResourceUnavailable {
                    path: path.to_string(),
                    reason: "not found".to_string(),
                });
            }
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(CountingElement::default()))
        }
    }

    struct StepClock(Mutex<f64>);

    impl MonotonicClock for StepClock {
        fn now_millis(&self) -> f64 {
            *self.0.lock()
        }
    }

    fn cache_with(
        factory: Arc<CountingFactory>,
        clock: Arc<StepClock>,
        recorder: Arc<MemoryRecorder>,
    ) -> PlaybackCache {
        let config = CoreConfig::builder()
            .audio_factory(factory)
            .clock(clock)
            .event_recorder(recorder)
            .build()
            .unwrap();
        PlaybackCache::new(config).unwrap()
    }

    #[test]
    fn acquire_reuses_handle() {
        let factory = Arc::new(CountingFactory::default());
        let recorder = Arc::new(MemoryRecorder::new());
        let cache = cache_with(
            factory.clone(),
            Arc::new(StepClock(Mutex::new(0.0))),
            recorder.clone(),
        );

        let first = cache.acquire("sfx/coin.wav").unwrap();
        let second = cache.acquire("sfx/coin.wav").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.created.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.count("created"), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_create_is_not_cached() {
        let factory = Arc::new(CountingFactory::default());
        let recorder = Arc::new(MemoryRecorder::new());
        let cache = cache_with(
            factory,
            Arc::new(StepClock(Mutex::new(0.0))),
            recorder.clone(),
        );

        let err = cache.acquire("sfx/gone.missing").unwrap_err();

        assert!(err.is_resource_error());
        assert!(cache.is_empty());
        assert!(recorder.is_empty());
    }

    #[test]
    fn trigger_throttles_inside_window() {
        let clock = Arc::new(StepClock(Mutex::new(1000.0)));
        let recorder = Arc::new(MemoryRecorder::new());
        let cache = cache_with(
            Arc::new(CountingFactory::default()),
            clock.clone(),
            recorder.clone(),
        );
        let handle = cache.acquire("sfx/jump.wav").unwrap();

        assert!(cache.trigger(&handle, true).unwrap().played());

        *clock.0.lock() = 1500.0;
        let outcome = cache.trigger(&handle, true).unwrap();

        assert_eq!(outcome, TriggerOutcome::Throttled { remaining_ms: 300.0 });
        assert_eq!(handle.last_play_timestamp(), 1000.0);
        assert_eq!(recorder.count("throttled"), 1);
    }

    #[test]
    fn new_rejects_window_set_after_validation() {
        let mut config = CoreConfig::builder()
            .audio_factory(Arc::new(CountingFactory::default()))
            .build()
            .unwrap();
        config.throttle_window_ms = -5.0;

        let err = PlaybackCache::new(config).unwrap_err();
        assert!(matches!(err, PlaybackError::Runtime(_)));
    }

    #[test]
    fn new_rejects_window_too_large_for_duration() {
        let mut config = CoreConfig::builder()
            .audio_factory(Arc::new(CountingFactory::default()))
            .build()
            .unwrap();
        config.throttle_window_ms = 1e300;

        assert!(PlaybackCache::new(config).is_err());
    }

    #[test]
    fn debug_reports_size() {
        let cache = cache_with(
            Arc::new(CountingFactory::default()),
            Arc::new(StepClock(Mutex::new(0.0))),
            Arc::new(MemoryRecorder::new()),
        );
        cache.acquire("a.wav").unwrap();

        let debug = format!("{:?}", cache);
        assert!(debug.contains("handles: 1"));
        assert!(debug.contains("throttle_window_ms: 800.0"));
    }
}
