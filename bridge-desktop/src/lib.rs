//! # Desktop Bridge Implementations
//!
//! Default implementations of the audio bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `RodioAudioFactory`: decodes files with `rodio` and plays them on the
//!   default output device (feature `audio-output`)
//! - `HeadlessAudioFactory`: accepts every request without producing sound,
//!   for servers, CI and hosts without an audio device
//!
//! ## Feature Flags
//!
//! - `audio-output`: Enable rodio-backed playback (requires system audio headers)
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::RodioAudioFactory;
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let factory = RodioAudioFactory::open_default()?;
//! let config = CoreConfig::builder()
//!     .audio_factory(Arc::new(factory))
//!     .build()?;
//! ```

mod error;
mod headless;

#[cfg(feature = "audio-output")]
mod output;

pub use error::DesktopError;
pub use headless::{HeadlessAudioFactory, HeadlessElement};

#[cfg(feature = "audio-output")]
pub use output::{RodioAudioFactory, RodioElement};
