//! Playback bridge traits and supporting event types.
//!
//! These abstractions let the core playback cache drive whatever audio
//! primitive the host platform offers (an `HtmlAudioElement` in the browser, a
//! `rodio` sink on desktop) without knowing how decoding or output works.
//! Host applications provide concrete implementations that satisfy their
//! platform constraints.

use crate::{error::Result, platform::PlatformSendSync};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A loaded (or lazily loadable) native audio object.
///
/// One element is created per resource path and reused for the lifetime of
/// the owning handle. Failures are reported as the platform raises them; the
/// core does not retry or translate them.
pub trait AudioElement: PlatformSendSync {
    /// Rewind playback to the start of the resource, interrupting any play
    /// currently in progress.
    fn reset_position(&self) -> Result<()>;

    /// Start playback from the current position.
    fn play(&self) -> Result<()>;
}

/// Constructor for native audio objects.
///
/// Implementations may load eagerly (and fail here on a bad path) or defer
/// every check to the first [`AudioElement::play`] call, the way browsers do.
pub trait AudioElementFactory: PlatformSendSync {
    /// Create a new native element for `path`.
    fn create(&self, path: &str) -> Result<Arc<dyn AudioElement>>;
}

/// Diagnostic event emitted by the playback cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// A native element was created for a path seen for the first time.
    Created { path: String },
    /// A trigger was accepted and playback started.
    Played { path: String, at_ms: f64 },
    /// A trigger was suppressed because the handle is still cooling down.
    Throttled { path: String, remaining_ms: f64 },
}

impl PlaybackEvent {
    /// Resource path the event refers to.
    pub fn path(&self) -> &str {
        match self {
            PlaybackEvent::Created { path }
            | PlaybackEvent::Played { path, .. }
            | PlaybackEvent::Throttled { path, .. } => path,
        }
    }

    /// Short machine-friendly name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PlaybackEvent::Created { .. } => "created",
            PlaybackEvent::Played { .. } => "played",
            PlaybackEvent::Throttled { .. } => "throttled",
        }
    }
}

impl fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackEvent::Created { path } => write!(f, "created audio {}", path),
            PlaybackEvent::Played { path, .. } => write!(f, "played {}", path),
            PlaybackEvent::Throttled { path, .. } => write!(f, "play throttled for {}", path),
        }
    }
}

/// Observability collaborator that receives every [`PlaybackEvent`].
///
/// Tests inject a recording implementation to assert on emitted events;
/// production code usually forwards them to `tracing`.
pub trait EventRecorder: PlatformSendSync {
    fn record(&self, event: &PlaybackEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_accessors() {
        let event = PlaybackEvent::Throttled {
            path: "sfx/click.ogg".to_string(),
            remaining_ms: 300.0,
        };
        assert_eq!(event.path(), "sfx/click.ogg");
        assert_eq!(event.kind(), "throttled");
        assert_eq!(event.to_string(), "play throttled for sfx/click.ogg");
    }

    #[test]
    fn created_event_display() {
        let event = PlaybackEvent::Created {
            path: "a.wav".to_string(),
        };
        assert_eq!(event.to_string(), "created audio a.wav");
        assert_eq!(event.kind(), "created");
    }

    #[test]
    fn played_event_display() {
        let event = PlaybackEvent::Played {
            path: "a.wav".to_string(),
            at_ms: 12.5,
        };
        assert_eq!(event.to_string(), "played a.wav");
        assert_eq!(event.path(), "a.wav");
    }
}
