#![cfg(target_arch = "wasm32")]
//! Browser tests for the audio and clock bridges.

use bridge_traits::{AudioElementFactory, MonotonicClock};
use bridge_wasm::{build_wasm_bridges, HtmlAudioFactory, PerformanceClock};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn performance_clock_is_monotonic() {
    let clock = PerformanceClock::new().unwrap();
    let first = clock.now_millis();
    let second = clock.now_millis();

    assert!(first >= 0.0);
    assert!(second >= first);
}

#[wasm_bindgen_test]
fn factory_creates_element_without_loading() {
    let factory = HtmlAudioFactory::new();
    let element = factory.create("/assets/does-not-exist.ogg").unwrap();

    // Browsers defer resource errors until playback.
    element.reset_position().unwrap();
}

#[wasm_bindgen_test]
fn bootstrap_builds_both_bridges() {
    let bridges = build_wasm_bridges().unwrap();
    let element = bridges.audio_factory().create("/assets/click.wav").unwrap();

    element.reset_position().unwrap();
    assert!(bridges.clock().now_millis() >= 0.0);
}
