//! Playback events
//!
//! The engine pushes a typed event for every externally observable
//! change. Consumers (UI, transport bridge) drain the buffer with
//! [`crate::PlayerEngine::drain_events`] and read current values off the
//! engine, instead of re-registering closures on every dependent change.

use crate::types::{PlaybackState, RepeatMode};
use melody_core::types::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Transport state changed (playing/paused/stopped)
    StateChanged {
        /// The new transport state
        state: PlaybackState,
    },

    /// The current track changed
    TrackChanged {
        /// ID of the new current track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Position/duration snapshot (emitted on demand, not per tick)
    PositionUpdate {
        /// Current playback position in seconds
        position_secs: f64,
        /// Track duration in seconds, when metadata has arrived
        duration_secs: Option<f64>,
    },

    /// Queue contents changed (replaced or reordered)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume (0.0-1.0)
        volume: f32,
    },

    /// Shuffle flag toggled
    ShuffleChanged {
        /// Whether shuffle is now enabled
        enabled: bool,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },
}
