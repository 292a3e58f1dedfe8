//! Error types for desktop bridge implementations

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Errors that can occur in desktop bridge implementations
#[derive(Error, Debug)]
pub enum DesktopError {
    /// Audio file is missing or unreadable
    #[error("Cannot read audio file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Audio data could not be decoded
    #[error("Cannot decode audio file {path}: {reason}")]
    Decode { path: String, reason: String },

    /// No output device could be opened
    #[error("Audio output unavailable: {0}")]
    OutputUnavailable(String),

    /// Output thread failed to start or died
    #[error("Audio output thread error: {0}")]
    OutputThread(String),
}

impl From<DesktopError> for BridgeError {
    fn from(err: DesktopError) -> Self {
        match err {
            DesktopError::Read { path, source } => BridgeError::ResourceUnavailable {
                path,
                reason: source.to_string(),
            },
            DesktopError::Decode { path, reason } => {
                BridgeError::ResourceUnavailable { path, reason }
            }
            DesktopError::OutputUnavailable(msg) => BridgeError::NotAvailable(msg),
            DesktopError::OutputThread(msg) => BridgeError::OperationFailed(msg),
        }
    }
}
