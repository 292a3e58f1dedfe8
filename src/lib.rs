//! Workspace facade crate.
//!
//! Re-exports the playback cache and its runtime so host applications can
//! depend on `sfx-workspace` and pick a platform through feature flags
//! (`desktop-shims`, `audio-output`, `wasm`) instead of wiring each crate.

#[cfg(any(feature = "desktop-shims", feature = "wasm"))]
pub use core_playback::{PlaybackCache, PlaybackError, PlaybackHandle, TriggerOutcome};

#[cfg(any(feature = "desktop-shims", feature = "wasm"))]
pub use core_runtime::config::{CoreConfig, DEFAULT_THROTTLE_WINDOW_MS};

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop as desktop;
