/// Playlist domain type
use crate::types::{PlaylistId, TrackId, UserId};
use serde::{Deserialize, Serialize};

/// User-owned playlist
///
/// Holds track membership by ID; the tracks themselves live in the
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Owning user
    pub user_id: UserId,

    /// Playlist name
    pub name: String,

    /// Member tracks, in playlist order
    pub track_ids: Vec<TrackId>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            user_id,
            name: name.into(),
            track_ids: Vec::new(),
        }
    }

    /// Check whether a track is in the playlist
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.track_ids.contains(track_id)
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }
}
