//! Audio output through `rodio` on the default device.
//!
//! `rodio::OutputStream` is not `Send`, so it lives on a dedicated thread for
//! as long as the factory exists. Only the stream's `Mixer`, which is
//! thread-safe, is shared with the elements.

use crate::error::DesktopError;
use bridge_traits::{
    error::Result,
    playback::{AudioElement, AudioElementFactory},
};
use parking_lot::Mutex;
use rodio::mixer::Mixer;
use rodio::{Decoder, OutputStreamBuilder, Sink};
use std::io::Cursor;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Owns the output stream thread. Dropping it closes the device.
struct OutputThread {
    shutdown: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl OutputThread {
    fn spawn() -> std::result::Result<(Self, Mixer), DesktopError> {
        let (ready_tx, ready_rx) = mpsc::channel::<std::result::Result<Mixer, String>>();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("sfx-audio-output".to_string())
            .spawn(move || match OutputStreamBuilder::open_default_stream() {
                Ok(stream) => {
                    if ready_tx.send(Ok(stream.mixer().clone())).is_err() {
                        return;
                    }
                    // Blocks until the factory drops its sender.
                    let _ = shutdown_rx.recv();
                    drop(stream);
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                }
            })
            .map_err(|e| DesktopError::OutputThread(e.to_string()))?;

        let mixer = ready_rx
            .recv()
            .map_err(|_| DesktopError::OutputThread("output thread exited early".to_string()))?
            .map_err(DesktopError::OutputUnavailable)?;

        Ok((
            Self {
                shutdown: Some(shutdown_tx),
                handle: Some(handle),
            },
            mixer,
        ))
    }
}

impl Drop for OutputThread {
    fn drop(&mut self) {
        self.shutdown.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Audio output thread panicked during shutdown");
            }
        }
    }
}

/// Factory producing [`RodioElement`]s that share one output mixer.
pub struct RodioAudioFactory {
    mixer: Mixer,
    _output: Option<OutputThread>,
}

impl RodioAudioFactory {
    /// Open the system's default output device.
    pub fn open_default() -> std::result::Result<Self, DesktopError> {
        let (output, mixer) = OutputThread::spawn()?;
        info!("Opened default audio output device");
        Ok(Self {
            mixer,
            _output: Some(output),
        })
    }

    /// Use a mixer owned by the host. The host keeps its `OutputStream` alive.
    pub fn with_mixer(mixer: Mixer) -> Self {
        Self {
            mixer,
            _output: None,
        }
    }
}

impl RodioAudioFactory {
    /// Read and check `path`, returning an element bound to this mixer.
    pub fn load(&self, path: &str) -> std::result::Result<RodioElement, DesktopError> {
        let bytes = std::fs::read(path).map_err(|source| DesktopError::Read {
            path: path.to_string(),
            source,
        })?;
        let data: Arc<[u8]> = Arc::from(bytes);

        // Decode once so unsupported formats fail here instead of on first play.
        Decoder::new(Cursor::new(Arc::clone(&data))).map_err(|e| DesktopError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        debug!(path, bytes = data.len(), "Loaded audio file");
        Ok(RodioElement {
            path: path.to_string(),
            data,
            mixer: self.mixer.clone(),
            sink: Mutex::new(None),
        })
    }
}

impl AudioElementFactory for RodioAudioFactory {
    fn create(&self, path: &str) -> Result<Arc<dyn AudioElement>> {
        Ok(Arc::new(self.load(path)?))
    }
}

/// An in-memory audio file bound to the output mixer.
///
/// Each play decodes the buffer from the start into a fresh `Sink`; resetting
/// stops whatever sink is currently playing.
pub struct RodioElement {
    path: String,
    data: Arc<[u8]>,
    mixer: Mixer,
    sink: Mutex<Option<Sink>>,
}

impl RodioElement {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether a previous play is still producing audio.
    pub fn is_playing(&self) -> bool {
        self.sink
            .lock()
            .as_ref()
            .map(|sink| !sink.empty())
            .unwrap_or(false)
    }

    /// Sources queued on the current sink.
    pub fn queued(&self) -> usize {
        self.sink.lock().as_ref().map(Sink::len).unwrap_or(0)
    }
}

impl AudioElement for RodioElement {
    fn reset_position(&self) -> Result<()> {
        if let Some(sink) = self.sink.lock().take() {
            sink.stop();
        }
        Ok(())
    }

    fn play(&self) -> Result<()> {
        let source =
            Decoder::new(Cursor::new(Arc::clone(&self.data))).map_err(|e| DesktopError::Decode {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let sink = Sink::connect_new(&self.mixer);
        sink.append(source);

        if let Some(previous) = self.sink.lock().replace(sink) {
            previous.stop();
        }
        Ok(())
    }
}
