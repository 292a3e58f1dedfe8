//! WebAssembly Bridge Implementations
//!
//! This crate provides browser implementations of the bridge traits defined in
//! `bridge-traits`, built on `web-sys` and `wasm-bindgen`.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It compiles to an empty crate on native targets.
//!
//! # Implementations
//!
//! - `HtmlAudioFactory`: one `HTMLAudioElement` per resource path
//! - `PerformanceClock`: `window.performance.now()` as the monotonic clock
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::build_wasm_bridges;
//! use core_runtime::config::CoreConfig;
//!
//! let bridges = build_wasm_bridges()?;
//! let config = CoreConfig::builder()
//!     .audio_factory(bridges.audio_factory())
//!     .clock(bridges.clock())
//!     .build()?;
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod audio;
pub mod bootstrap;
pub mod clock;
pub mod error;

// Re-export commonly used types
pub use audio::{HtmlAudioFactory, WasmAudioElement};
pub use bootstrap::{build_wasm_bridges, WasmBridgeSet};
pub use clock::PerformanceClock;
pub use error::{WasmError, WasmResult};
