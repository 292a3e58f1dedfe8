//! # Playback Error Types

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors that can occur while acquiring or triggering sounds.
///
/// A throttled trigger is not an error; see
/// [`TriggerOutcome::Throttled`](crate::TriggerOutcome::Throttled).
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// `acquire` was called with an empty resource path.
    #[error("Resource path must not be empty")]
    EmptyPath,

    /// Failure raised by the platform audio primitive, passed through as-is.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// The runtime configuration could not be assembled.
    #[error(transparent)]
    Runtime(#[from] core_runtime::Error),
}

impl PlaybackError {
    /// Returns `true` if the host refused to start playback (e.g. an autoplay
    /// policy); retrying after a user gesture usually succeeds.
    pub fn is_playback_rejected(&self) -> bool {
        matches!(self, PlaybackError::Bridge(BridgeError::PlaybackRejected(_)))
    }

    /// Returns `true` if the audio resource itself is missing or unreadable.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            PlaybackError::Bridge(BridgeError::ResourceUnavailable { .. })
        )
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_errors_keep_their_message() {
        let err = PlaybackError::from(BridgeError::PlaybackRejected(
            "NotAllowedError".to_string(),
        ));
        assert_eq!(err.to_string(), "Playback rejected by host: NotAllowedError");
        assert!(err.is_playback_rejected());
        assert!(!err.is_resource_error());
    }

    #[test]
    fn resource_errors_are_classified() {
        let err = PlaybackError::from(BridgeError::ResourceUnavailable {
            path: "a.wav".to_string(),
            reason: "not found".to_string(),
        });
        assert!(err.is_resource_error());
    }
}
