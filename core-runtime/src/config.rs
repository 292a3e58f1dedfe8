//! # Core Configuration Module
//!
//! Provides configuration management for the playback core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the throttle policy and every bridge the playback cache
//! talks to. It enforces fail-fast validation so a missing capability is
//! reported at startup rather than on the first sound effect.
//!
//! ## Required Dependencies
//!
//! - `AudioElementFactory` - Creates native audio objects
//!
//! ## Optional Dependencies (with platform defaults)
//!
//! - `MonotonicClock` - Throttle time source (native default: `SystemClock`;
//!   required on wasm32)
//! - `EventRecorder` - Diagnostics collaborator (the cache falls back to
//!   tracing output)
//!
//! When the `audio-output` feature is enabled, a `rodio`-backed factory on the
//! default output device is injected automatically if none is provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .audio_factory(Arc::new(MyAudioFactory))
//!     .throttle_window_ms(500.0)
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Error Handling
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//!
//! // Fails with an actionable CapabilityMissing error
//! let config = CoreConfig::builder().build();
//! assert!(config.is_err());
//! ```

use crate::error::{Error, Result};
use bridge_traits::{AudioElementFactory, EventRecorder, MonotonicClock};
use std::sync::Arc;
use std::time::Duration;

/// Minimum spacing between accepted throttled plays on the same handle.
pub const DEFAULT_THROTTLE_WINDOW_MS: f64 = 800.0;

/// Core configuration for the playback cache.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Throttle window in milliseconds
    pub throttle_window_ms: f64,

    /// Constructor for native audio objects (required)
    pub audio_factory: Arc<dyn AudioElementFactory>,

    /// Monotonic time source used for throttle decisions
    pub clock: Arc<dyn MonotonicClock>,

    /// Diagnostics collaborator (optional)
    pub event_recorder: Option<Arc<dyn EventRecorder>>,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("throttle_window_ms", &self.throttle_window_ms)
            .field("audio_factory", &"AudioElementFactory { ... }")
            .field("clock", &"MonotonicClock { ... }")
            .field(
                "event_recorder",
                &self
                    .event_recorder
                    .as_ref()
                    .map(|_| "EventRecorder { ... }"),
            )
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Throttle window as a [`Duration`].
    ///
    /// Fails the same way [`validate`](CoreConfig::validate) does, since the
    /// public fields may have been changed after `build()`.
    pub fn throttle_window(&self) -> Result<Duration> {
        self.validate()?;
        window_duration(self.throttle_window_ms)
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// The throttle window must be a finite, non-negative number of
    /// milliseconds that fits in a [`Duration`]. Zero disables throttling
    /// entirely.
    pub fn validate(&self) -> Result<()> {
        if !self.throttle_window_ms.is_finite() {
            return Err(Error::Config(format!(
                "Throttle window must be finite, got {}",
                self.throttle_window_ms
            )));
        }

        if self.throttle_window_ms < 0.0 {
            return Err(Error::Config(format!(
                "Throttle window cannot be negative, got {} ms",
                self.throttle_window_ms
            )));
        }

        window_duration(self.throttle_window_ms).map(|_| ())
    }
}

fn window_duration(window_ms: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(window_ms / 1000.0).map_err(|_| {
        Error::Config(format!(
            "Throttle window of {} ms is too large to represent",
            window_ms
        ))
    })
}

#[cfg(not(feature = "audio-output"))]
fn audio_factory_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "AudioElementFactory".to_string(),
        message: "AudioElementFactory implementation is required to create native audio objects. \
                 Desktop: enable the 'audio-output' feature to use the default rodio output, \
                 or inject bridge_desktop::HeadlessAudioFactory for silent hosts. \
                 Web: inject bridge_wasm::HtmlAudioFactory."
            .to_string(),
    }
}

#[cfg(feature = "audio-output")]
fn provide_default_audio_factory() -> Result<Arc<dyn AudioElementFactory>> {
    use bridge_desktop::RodioAudioFactory;

    let factory = RodioAudioFactory::open_default().map_err(|e| {
        Error::Internal(format!("Failed to open default audio output: {}", e))
    })?;
    let factory: Arc<dyn AudioElementFactory> = Arc::new(factory);
    Ok(factory)
}

#[cfg(not(feature = "audio-output"))]
fn provide_default_audio_factory() -> Result<Arc<dyn AudioElementFactory>> {
    Err(audio_factory_missing_error())
}

#[cfg(not(target_arch = "wasm32"))]
fn provide_default_clock() -> Result<Arc<dyn MonotonicClock>> {
    let clock: Arc<dyn MonotonicClock> = Arc::new(bridge_traits::SystemClock::new());
    Ok(clock)
}

#[cfg(target_arch = "wasm32")]
fn provide_default_clock() -> Result<Arc<dyn MonotonicClock>> {
    Err(Error::CapabilityMissing {
        capability: "MonotonicClock".to_string(),
        message: "std::time::Instant is unavailable in the browser. \
                 Inject bridge_wasm::PerformanceClock."
            .to_string(),
    })
}

/// Builder for constructing [`CoreConfig`] instances.
///
/// Set options incrementally, then call [`build()`](CoreConfigBuilder::build).
#[derive(Default)]
pub struct CoreConfigBuilder {
    throttle_window_ms: Option<f64>,
    audio_factory: Option<Arc<dyn AudioElementFactory>>,
    clock: Option<Arc<dyn MonotonicClock>>,
    event_recorder: Option<Arc<dyn EventRecorder>>,
}

impl CoreConfigBuilder {
    /// Sets the throttle window in milliseconds (default 800).
    pub fn throttle_window_ms(mut self, window_ms: f64) -> Self {
        self.throttle_window_ms = Some(window_ms);
        self
    }

    /// Sets the throttle window from a [`Duration`].
    pub fn throttle_window(self, window: Duration) -> Self {
        self.throttle_window_ms(window.as_secs_f64() * 1000.0)
    }

    /// Sets the native audio object constructor.
    pub fn audio_factory(mut self, factory: Arc<dyn AudioElementFactory>) -> Self {
        self.audio_factory = Some(factory);
        self
    }

    /// Sets the monotonic time source.
    pub fn clock(mut self, clock: Arc<dyn MonotonicClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sets the diagnostics collaborator.
    pub fn event_recorder(mut self, recorder: Arc<dyn EventRecorder>) -> Self {
        self.event_recorder = Some(recorder);
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Returns
    ///
    /// Returns `Ok(CoreConfig)` on success, or an error if:
    /// - No `AudioElementFactory` was provided and no platform default exists
    /// - No `MonotonicClock` was provided on wasm32
    /// - The throttle window is negative or not finite
    pub fn build(self) -> Result<CoreConfig> {
        let audio_factory = match self.audio_factory {
            Some(factory) => factory,
            None => provide_default_audio_factory()?,
        };

        let clock = match self.clock {
            Some(clock) => clock,
            None => provide_default_clock()?,
        };

        let config = CoreConfig {
            throttle_window_ms: self
                .throttle_window_ms
                .unwrap_or(DEFAULT_THROTTLE_WINDOW_MS),
            audio_factory,
            clock,
            event_recorder: self.event_recorder,
        };

        config.validate()?;

        Ok(config)
    }
}
