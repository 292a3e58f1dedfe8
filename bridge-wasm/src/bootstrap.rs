//! Convenience helpers for wiring the wasm bridge implementations together.
//!
//! Host shells can use [`build_wasm_bridges`] to construct the browser audio
//! factory and clock without repeating glue code. The result plays the role
//! that `bridge-desktop` plays for native targets.

use std::sync::Arc;

use bridge_traits::{
    error::Result as BridgeResult,
    playback::AudioElementFactory,
    time::MonotonicClock,
};

use crate::{audio::HtmlAudioFactory, clock::PerformanceClock};

/// Fully constructed wasm bridge objects ready for injection into the core.
pub struct WasmBridgeSet {
    /// `HTMLAudioElement` factory.
    pub audio_factory: Arc<dyn AudioElementFactory>,
    /// `performance.now()` clock.
    pub clock: Arc<dyn MonotonicClock>,
}

impl WasmBridgeSet {
    /// Convenience accessor to clone the audio factory.
    pub fn audio_factory(&self) -> Arc<dyn AudioElementFactory> {
        Arc::clone(&self.audio_factory)
    }

    /// Convenience accessor to clone the clock.
    pub fn clock(&self) -> Arc<dyn MonotonicClock> {
        Arc::clone(&self.clock)
    }
}

/// Build the default wasm bridge stack.
///
/// Fails when called outside a window context (e.g. in a worker without
/// `performance`).
pub fn build_wasm_bridges() -> BridgeResult<WasmBridgeSet> {
    let audio_factory: Arc<dyn AudioElementFactory> = Arc::new(HtmlAudioFactory::new());
    let clock: Arc<dyn MonotonicClock> = Arc::new(PerformanceClock::new()?);

    Ok(WasmBridgeSet {
        audio_factory,
        clock,
    })
}
