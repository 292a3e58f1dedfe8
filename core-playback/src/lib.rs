//! # Cached, Throttled Sound Playback
//!
//! Plays short sounds (UI clicks, game effects) from resource paths while
//! keeping one native audio object per path and suppressing rapid-fire
//! repeats.
//!
//! ## Overview
//!
//! - [`PlaybackCache::acquire`] returns the shared [`PlaybackHandle`] for a
//!   path, creating the native element on first use.
//! - [`PlaybackCache::trigger`] rewinds and plays a handle, optionally
//!   throttled to one accepted play per throttle window (800 ms by default).
//!
//! Platform audio is reached only through the `bridge-traits` contracts, so
//! the same cache drives `rodio` on desktop and `HtmlAudioElement` in the
//! browser.
//!
//! ## Usage
//!
//! ```ignore
//! use core_playback::PlaybackCache;
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .audio_factory(Arc::new(bridge_desktop::HeadlessAudioFactory::new()))
//!     .build()?;
//! let cache = PlaybackCache::new(config)?;
//!
//! let click = cache.acquire("assets/click.wav")?;
//! cache.trigger(&click, true)?;
//! ```

pub mod cache;
pub mod error;
pub mod events;
pub mod handle;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use cache::{PlaybackCache, TriggerOutcome};
pub use error::{PlaybackError, Result};
pub use events::{MemoryRecorder, TracingRecorder};
pub use handle::PlaybackHandle;
