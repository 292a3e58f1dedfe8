#![cfg(target_arch = "wasm32")]
//! Browser tests for the JavaScript bindings.

use core_playback::wasm::JsPlaybackCache;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn same_path_wrappers_share_a_handle() {
    let cache = JsPlaybackCache::new(None).unwrap();

    let first = cache.new_audio("/assets/click.ogg").unwrap();
    let second = cache.new_audio("/assets/click.ogg").unwrap();

    assert!(first.is(&second));
    assert!(second.is(&first));
    assert_eq!(cache.size(), 1);
}

#[wasm_bindgen_test]
fn different_paths_are_different_handles() {
    let cache = JsPlaybackCache::new(None).unwrap();

    let click = cache.new_audio("/assets/click.ogg").unwrap();
    let pop = cache.new_audio("/assets/pop.ogg").unwrap();

    assert!(!click.is(&pop));
    assert_eq!(cache.size(), 2);
}

#[wasm_bindgen_test]
fn new_handle_starts_at_clock_origin() {
    let cache = JsPlaybackCache::new(Some(200.0)).unwrap();
    let click = cache.new_audio("/assets/click.ogg").unwrap();

    assert_eq!(click.last_play_timestamp(), 0.0);
    assert_eq!(cache.throttle_window_ms(), 200.0);
}

#[wasm_bindgen_test]
fn invalid_window_is_rejected() {
    assert!(JsPlaybackCache::new(Some(-1.0)).is_err());
}
