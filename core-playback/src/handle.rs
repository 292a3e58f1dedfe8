//! Playback handle: one native audio element plus its throttle bookkeeping.

use bridge_traits::playback::AudioElement;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Reusable handle for a single audio resource.
///
/// Handles are created by [`PlaybackCache::acquire`](crate::PlaybackCache::acquire)
/// and shared as `Arc<PlaybackHandle>`; two handles for the same path never
/// exist in one cache.
pub struct PlaybackHandle {
    path: String,
    element: Arc<dyn AudioElement>,
    state: Mutex<PlayState>,
}

/// Throttle bookkeeping, guarded by the handle's lock.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PlayState {
    /// Monotonic time (ms) of the last accepted play. Starts at 0, the clock
    /// origin, so triggers in the first window after the origin are throttled.
    pub(crate) last_ms: f64,
    pub(crate) plays: u64,
}

impl PlaybackHandle {
    pub(crate) fn new(path: impl Into<String>, element: Arc<dyn AudioElement>) -> Self {
        Self {
            path: path.into(),
            element,
            state: Mutex::new(PlayState::default()),
        }
    }

    /// Resource path this handle was created for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Monotonic time in milliseconds of the most recent accepted play, or
    /// `0.0` if the handle has never played.
    pub fn last_play_timestamp(&self) -> f64 {
        self.state.lock().last_ms
    }

    /// Whether any trigger on this handle has been accepted yet.
    pub fn has_played(&self) -> bool {
        self.state.lock().plays > 0
    }

    /// Number of accepted triggers.
    pub fn play_count(&self) -> u64 {
        self.state.lock().plays
    }

    /// Milliseconds left before a throttled trigger at `now_ms` would be
    /// accepted, or `None` if it would be accepted right away.
    pub fn remaining_cooldown(&self, now_ms: f64, window_ms: f64) -> Option<f64> {
        cooldown_remaining(self.state.lock().last_ms, now_ms, window_ms)
    }

    pub(crate) fn element(&self) -> &Arc<dyn AudioElement> {
        &self.element
    }

    pub(crate) fn state(&self) -> &Mutex<PlayState> {
        &self.state
    }
}

impl fmt::Debug for PlaybackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackHandle")
            .field("path", &self.path)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

/// Strict comparison: an elapsed time equal to the window is not throttled.
pub(crate) fn cooldown_remaining(last_ms: f64, now_ms: f64, window_ms: f64) -> Option<f64> {
    let elapsed = now_ms - last_ms;
    (elapsed < window_ms).then(|| window_ms - elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::Result as BridgeResult;

    struct Silent;

    impl AudioElement for Silent {
        fn reset_position(&self) -> BridgeResult<()> {
            Ok(())
        }

        fn play(&self) -> BridgeResult<()> {
            Ok(())
        }
    }

    #[test]
    fn new_handle_has_never_played() {
        let handle = PlaybackHandle::new("sfx/pop.wav", Arc::new(Silent));

        assert_eq!(handle.path(), "sfx/pop.wav");
        assert_eq!(handle.last_play_timestamp(), 0.0);
        assert!(!handle.has_played());
        assert_eq!(handle.play_count(), 0);
    }

    #[test]
    fn new_handle_cools_down_from_clock_origin() {
        let handle = PlaybackHandle::new("sfx/pop.wav", Arc::new(Silent));

        assert_eq!(handle.remaining_cooldown(500.0, 800.0), Some(300.0));
        assert_eq!(handle.remaining_cooldown(800.0, 800.0), None);
    }

    #[test]
    fn cooldown_inside_window() {
        assert_eq!(cooldown_remaining(1000.0, 1500.0, 800.0), Some(300.0));
    }

    #[test]
    fn cooldown_boundary_is_not_throttled() {
        assert_eq!(cooldown_remaining(1000.0, 1800.0, 800.0), None);
    }

    #[test]
    fn cooldown_after_window() {
        assert_eq!(cooldown_remaining(1000.0, 1900.0, 800.0), None);
    }

    #[test]
    fn zero_window_never_throttles() {
        assert_eq!(cooldown_remaining(5.0, 5.0, 0.0), None);
    }

    #[test]
    fn debug_output_names_path() {
        let handle = PlaybackHandle::new("ui/tick.ogg", Arc::new(Silent));
        let debug = format!("{:?}", handle);
        assert!(debug.contains("ui/tick.ogg"));
    }
}
