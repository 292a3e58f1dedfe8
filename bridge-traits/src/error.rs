use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Audio resource unavailable: {path} ({reason})")]
    ResourceUnavailable { path: String, reason: String },

    #[error("Playback rejected by host: {0}")]
    PlaybackRejected(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
