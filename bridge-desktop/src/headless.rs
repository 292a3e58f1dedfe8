//! Silent audio bridge for hosts without an output device.

use crate::error::DesktopError;
use bridge_traits::{
    error::Result,
    playback::{AudioElement, AudioElementFactory},
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Factory whose elements accept every call and produce no sound.
///
/// With [`HeadlessAudioFactory::verifying`] the factory checks that the file
/// exists at creation time, so a headless run still catches broken asset
/// paths.
#[derive(Debug, Clone, Default)]
pub struct HeadlessAudioFactory {
    verify_paths: bool,
}

impl HeadlessAudioFactory {
    /// Create a factory that accepts any path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory that rejects paths that do not point at a file.
    pub fn verifying() -> Self {
        Self { verify_paths: true }
    }
}

impl AudioElementFactory for HeadlessAudioFactory {
    fn create(&self, path: &str) -> Result<Arc<dyn AudioElement>> {
        if self.verify_paths {
            std::fs::metadata(Path::new(path)).map_err(|source| DesktopError::Read {
                path: path.to_string(),
                source,
            })?;
        }

        Ok(Arc::new(HeadlessElement::new(path)))
    }
}

/// Element created by [`HeadlessAudioFactory`]. Counts calls for diagnostics.
#[derive(Debug)]
pub struct HeadlessElement {
    path: String,
    resets: AtomicU64,
    plays: AtomicU64,
}

impl HeadlessElement {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resets: AtomicU64::new(0),
            plays: AtomicU64::new(0),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of `play` calls received.
    pub fn plays(&self) -> u64 {
        self.plays.load(Ordering::Relaxed)
    }

    /// Number of `reset_position` calls received.
    pub fn resets(&self) -> u64 {
        self.resets.load(Ordering::Relaxed)
    }
}

impl AudioElement for HeadlessElement {
    fn reset_position(&self) -> Result<()> {
        self.resets.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn play(&self) -> Result<()> {
        self.plays.fetch_add(1, Ordering::Relaxed);
        trace!(path = %self.path, "headless play");
        Ok(())
    }
}
