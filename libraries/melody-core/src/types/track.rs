/// Track domain type
use crate::types::{TrackId, UserId};
use serde::{Deserialize, Serialize};

/// Marketplace catalog record
///
/// Tracks are created by the artist upload workflow and mutated only by
/// the artist edit workflow. Playback and catalog code treats them as
/// read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Identifier of the owning artist account, when known
    pub artist_id: Option<UserId>,

    /// Album name
    pub album: String,

    /// Price in the marketplace currency (non-negative)
    pub price: f64,

    /// Cover artwork URL
    pub cover_url: Option<String>,

    /// Display duration, e.g. "3:45" (not guaranteed to be seconds)
    pub duration: String,

    /// Genre tag
    pub genre: String,

    /// Audio media URL for the playback primitive
    pub audio_url: String,
}

impl Track {
    /// Create a new track with a generated ID and empty media references
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            artist_id: None,
            album: album.into(),
            price: 0.0,
            cover_url: None,
            duration: String::new(),
            genre: String::new(),
            audio_url: String::new(),
        }
    }

    /// Check whether the track is owned by the given artist account
    pub fn is_by_artist(&self, user_id: &UserId) -> bool {
        self.artist_id.as_ref() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_track_has_generated_id() {
        let a = Track::new("One", "Artist", "Album");
        let b = Track::new("Two", "Artist", "Album");
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "One");
        assert_eq!(a.price, 0.0);
    }

    #[test]
    fn artist_ownership() {
        let owner = UserId::new("artist-1");
        let mut track = Track::new("Beat", "Someone", "Single");
        assert!(!track.is_by_artist(&owner));

        track.artist_id = Some(owner.clone());
        assert!(track.is_by_artist(&owner));
        assert!(!track.is_by_artist(&UserId::new("artist-2")));
    }
}
