//! `HTMLAudioElement` bridge.
//!
//! Browsers load media lazily: constructing an element never fails for a bad
//! URL, and decode or network errors only show up once playback starts.

use crate::error::{js_message, WasmError};
use bridge_traits::{
    error::Result,
    playback::{AudioElement, AudioElementFactory},
};
use std::sync::Arc;
use tracing::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Creates one `HTMLAudioElement` per resource path.
#[derive(Debug, Clone, Default)]
pub struct HtmlAudioFactory;

impl HtmlAudioFactory {
    /// Create a new factory.
    pub fn new() -> Self {
        Self
    }
}

impl AudioElementFactory for HtmlAudioFactory {
    fn create(&self, path: &str) -> Result<Arc<dyn AudioElement>> {
        let element = HtmlAudioElement::new_with_src(path).map_err(|e| WasmError::AudioElement {
            path: path.to_string(),
            message: js_message(&e),
        })?;
        Ok(Arc::new(WasmAudioElement { element }))
    }
}

/// Wrapper over a browser audio element.
#[derive(Debug)]
pub struct WasmAudioElement {
    element: HtmlAudioElement,
}

impl WasmAudioElement {
    /// Resolved URL the element loads from.
    pub fn src(&self) -> String {
        self.element.src()
    }

    /// Borrow the underlying DOM element.
    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl AudioElement for WasmAudioElement {
    fn reset_position(&self) -> Result<()> {
        self.element.set_current_time(0.0);
        Ok(())
    }

    fn play(&self) -> Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| WasmError::PlaybackRejected(js_message(&e)))?;

        // Autoplay policy and decode failures reject the promise later; there
        // is no caller left to return them to, so they end up in the log.
        let src = self.element.src();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!(src = %src, error = %js_message(&e), "Audio playback rejected");
            }
        });
        Ok(())
    }
}
