//! Playback Events
//!
//! Emitted by the manager whenever observable state changes, so a view layer
//! can re-render from `drain_events()` instead of polling.

use crate::types::{PlaybackState, RepeatMode};
use serde::Serialize;

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// Transport state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track is now loaded
    TrackChanged {
        /// ID of the new track, `None` when unloaded
        track_id: Option<String>,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Queue contents or pointer changed
    QueueChanged {
        /// New queue length
        length: usize,
        /// New current index
        current_index: Option<usize>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Shuffle or repeat changed
    ModeChanged {
        shuffle: bool,
        repeat: RepeatMode,
    },

    /// The queue panel was shown or hidden
    VisibilityChanged { visible: bool },
}
