//! WebAssembly bindings for core-playback
//!
//! Exposes the playback cache to JavaScript as `PlaybackCache` with
//! `newAudio(path)` and `play(handle, throttle)`, backed by
//! `HTMLAudioElement` and `performance.now()`.

use crate::cache::PlaybackCache;
use crate::error::PlaybackError;
use crate::handle::PlaybackHandle;
use bridge_wasm::build_wasm_bridges;
use core_runtime::config::CoreConfig;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Enable Rust logging to browser console
/// Call this once at startup to see tracing logs in DevTools
#[wasm_bindgen(js_name = enableConsoleLogging)]
pub fn enable_console_logging() {
    use bridge_traits::time::LogLevel;
    use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};

    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug);

    if init_logging(config).is_ok() {
        web_sys::console::log_1(&"Rust console logging enabled (tracing-wasm)".into());
    }
}

fn to_js_error(err: PlaybackError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Opaque handle returned by `PlaybackCache.newAudio`.
///
/// Every `newAudio` call returns a fresh JS wrapper, so `===` does not tell
/// whether two handles share an element. Use `a.is(b)` instead.
#[wasm_bindgen(js_name = AudioHandle)]
pub struct JsAudioHandle {
    inner: Arc<PlaybackHandle>,
}

#[wasm_bindgen(js_class = AudioHandle)]
impl JsAudioHandle {
    #[wasm_bindgen(getter)]
    pub fn path(&self) -> String {
        self.inner.path().to_string()
    }

    /// `performance.now()` of the last accepted play, 0 if never played.
    #[wasm_bindgen(getter, js_name = lastPlayTimestamp)]
    pub fn last_play_timestamp(&self) -> f64 {
        self.inner.last_play_timestamp()
    }

    /// Whether both wrappers refer to the same cached handle.
    pub fn is(&self, other: &JsAudioHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Browser-facing playback cache.
#[wasm_bindgen(js_name = PlaybackCache)]
pub struct JsPlaybackCache {
    inner: PlaybackCache,
}

#[wasm_bindgen(js_class = PlaybackCache)]
impl JsPlaybackCache {
    /// Create a cache using the page's audio elements and clock.
    ///
    /// `throttleWindowMs` defaults to 800.
    #[wasm_bindgen(constructor)]
    pub fn new(throttle_window_ms: Option<f64>) -> Result<JsPlaybackCache, JsValue> {
        #[cfg(feature = "wasm")]
        console_error_panic_hook::set_once();

        let bridges =
            build_wasm_bridges().map_err(|e| to_js_error(PlaybackError::Bridge(e)))?;

        let mut builder = CoreConfig::builder()
            .audio_factory(bridges.audio_factory())
            .clock(bridges.clock());
        if let Some(window) = throttle_window_ms {
            builder = builder.throttle_window_ms(window);
        }
        let config = builder
            .build()
            .map_err(|e| to_js_error(PlaybackError::Runtime(e)))?;

        Ok(JsPlaybackCache {
            inner: PlaybackCache::new(config).map_err(to_js_error)?,
        })
    }

    /// Return the cached handle for `path`, creating the element on first use.
    #[wasm_bindgen(js_name = newAudio)]
    pub fn new_audio(&self, path: &str) -> Result<JsAudioHandle, JsValue> {
        let inner = self.inner.acquire(path).map_err(to_js_error)?;
        Ok(JsAudioHandle { inner })
    }

    /// Rewind and play. Returns `false` when the play was throttled.
    pub fn play(&self, handle: &JsAudioHandle, throttle: bool) -> Result<bool, JsValue> {
        let outcome = self
            .inner
            .trigger(&handle.inner, throttle)
            .map_err(to_js_error)?;
        Ok(outcome.played())
    }

    #[wasm_bindgen(getter, js_name = throttleWindowMs)]
    pub fn throttle_window_ms(&self) -> f64 {
        self.inner.throttle_window_ms()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }
}
