//! Error types for WebAssembly bridge implementations

use bridge_traits::error::BridgeError;
use thiserror::Error;
use wasm_bindgen::JsCast;

/// Result type for WebAssembly bridge operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors that can occur in WebAssembly bridge implementations
#[derive(Error, Debug)]
pub enum WasmError {
    /// A browser global (window, performance) is missing
    #[error("Browser API unavailable: {0}")]
    Unavailable(String),

    /// The audio element could not be constructed for a source
    #[error("Cannot create audio element for {path}: {message}")]
    AudioElement {
        /// Resource path passed to the factory
        path: String,
        /// Message extracted from the JavaScript exception
        message: String,
    },

    /// The browser refused to start playback
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),
}

impl From<WasmError> for BridgeError {
    fn from(err: WasmError) -> Self {
        match err {
            WasmError::AudioElement { path, message } => BridgeError::ResourceUnavailable {
                path,
                reason: message,
            },
            WasmError::PlaybackRejected(msg) => BridgeError::PlaybackRejected(msg),
            WasmError::Unavailable(msg) => BridgeError::NotAvailable(msg),
        }
    }
}

/// Best-effort human readable message for a thrown JavaScript value.
pub(crate) fn js_message(js_value: &wasm_bindgen::JsValue) -> String {
    if let Some(text) = js_value.as_string() {
        text
    } else if let Some(error) = js_value.dyn_ref::<js_sys::Error>() {
        error.message().into()
    } else {
        format!("{:?}", js_value)
    }
}
