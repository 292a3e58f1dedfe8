//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the playback core and
//! platform-specific implementations. Each trait represents a capability the
//! core requires but that must be implemented differently per platform
//! (desktop, web).
//!
//! ## Traits
//!
//! ### Audio
//! - [`AudioElementFactory`](playback::AudioElementFactory) - Creates native audio objects for a path
//! - [`AudioElement`](playback::AudioElement) - Rewinds and plays one native audio object
//!
//! ### Observability
//! - [`EventRecorder`](playback::EventRecorder) - Receives cache diagnostics (created / played / throttled)
//! - [`LoggerSink`](time::LoggerSink) - Forward structured logs to host logging
//!
//! ### Utilities
//! - [`MonotonicClock`](time::MonotonicClock) - Time source for throttling and deterministic testing
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ rodio output behind `audio-output` |
//! | Web      | `bridge-wasm`       | ✅ `HtmlAudioElement` |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Platform implementations should:
//!
//! - Convert platform-specific errors to `BridgeError`
//! - Include the resource path in the error where one is known
//!
//! ## Thread Safety
//!
//! Bridge traits require [`PlatformSendSync`](platform::PlatformSendSync),
//! which is `Send + Sync` on native targets and empty on `wasm32`.
//!
//! ## Examples
//!
//! ### Implementing AudioElementFactory
//!
//! ```ignore
//! use bridge_traits::error::Result;
//! use bridge_traits::playback::{AudioElement, AudioElementFactory};
//! use std::sync::Arc;
//!
//! struct SilentFactory;
//! struct SilentElement;
//!
//! impl AudioElement for SilentElement {
//!     fn reset_position(&self) -> Result<()> { Ok(()) }
//!     fn play(&self) -> Result<()> { Ok(()) }
//! }
//!
//! impl AudioElementFactory for SilentFactory {
//!     fn create(&self, _path: &str) -> Result<Arc<dyn AudioElement>> {
//!         Ok(Arc::new(SilentElement))
//!     }
//! }
//! ```

pub mod error;
pub mod platform;
pub mod playback;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use playback::{AudioElement, AudioElementFactory, EventRecorder, PlaybackEvent};
pub use time::{ConsoleLogger, LogEntry, LogLevel, LoggerSink, MonotonicClock, SystemClock};
