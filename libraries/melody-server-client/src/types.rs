//! Types for Melody backend API requests and responses.

use crate::error::{Result, ServerClientError};
use chrono::{DateTime, Utc};
use melody_core::types::{Comment, CommentId, Playlist, PlaylistId, Track, TrackId, User, UserId};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to the marketplace backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "https://api.melody.example")
    pub url: String,
    /// Current access token (if authenticated)
    pub access_token: Option<String>,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for account creation.
#[derive(Debug, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_artist: bool,
}

/// Response from successful login or signup.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: ApiUser,
}

/// Account profile as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub is_artist: bool,
    pub avatar_url: Option<String>,
}

impl From<ApiUser> for User {
    fn from(user: ApiUser) -> Self {
        Self {
            id: UserId::new(user.id),
            name: user.name,
            email: user.email,
            balance: user.balance,
            is_artist: user.is_artist,
            avatar_url: user.avatar_url,
        }
    }
}

// =============================================================================
// Catalog Types
// =============================================================================

/// A track as returned by the server, newest-first in listings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artist_id: Option<String>,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub price: f64,
    pub cover_url: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub genre: String,
    pub audio_url: String,
}

impl From<ApiTrack> for Track {
    fn from(track: ApiTrack) -> Self {
        Self {
            id: TrackId::new(track.id),
            title: track.title,
            artist: track.artist,
            artist_id: track.artist_id.map(UserId::new),
            album: track.album,
            price: track.price,
            cover_url: track.cover_url,
            duration: track.duration,
            genre: track.genre,
            audio_url: track.audio_url,
        }
    }
}

/// Upload form for a new track.
///
/// All fields are explicit; `validate` runs at the collaborator boundary
/// before any bytes hit the wire.
#[derive(Debug, Clone, Serialize)]
pub struct UploadTrackRequest {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub price: f64,
    pub genre: String,
    /// Display duration, e.g. "3:45"
    pub duration: String,
    pub cover_url: Option<String>,
    pub audio_url: String,
}

impl UploadTrackRequest {
    /// Validate the form before submission.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ServerClientError::InvalidRequest(
                "title must not be empty".into(),
            ));
        }
        if self.artist.trim().is_empty() {
            return Err(ServerClientError::InvalidRequest(
                "artist must not be empty".into(),
            ));
        }
        if self.audio_url.trim().is_empty() {
            return Err(ServerClientError::InvalidRequest(
                "audio reference must not be empty".into(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ServerClientError::InvalidRequest(
                "price must be a non-negative amount".into(),
            ));
        }
        Ok(())
    }
}

/// Partial edit of an existing track; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTrackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl UpdateTrackRequest {
    /// Validate the edit before submission.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ServerClientError::InvalidRequest(
                    "title must not be empty".into(),
                ));
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(ServerClientError::InvalidRequest(
                    "price must be a non-negative amount".into(),
                ));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Library / Purchase Types
// =============================================================================

/// Purchase confirmation sent after the hosted checkout acknowledgement.
///
/// The client does not verify payment; this is the single
/// "purchase confirmed" signal from the payment collaborator.
#[derive(Debug, Serialize)]
pub struct PurchaseRequest {
    pub track_ids: Vec<String>,
}

/// Receipt returned once the library entries are granted.
#[derive(Debug, Deserialize)]
pub struct PurchaseReceipt {
    pub granted_track_ids: Vec<String>,
    #[serde(default)]
    pub total: f64,
}

// =============================================================================
// Playlist Types
// =============================================================================

/// A playlist as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiPlaylist {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub track_ids: Vec<String>,
}

impl From<ApiPlaylist> for Playlist {
    fn from(playlist: ApiPlaylist) -> Self {
        Self {
            id: PlaylistId::new(playlist.id),
            user_id: UserId::new(playlist.user_id),
            name: playlist.name,
            track_ids: playlist.track_ids.into_iter().map(TrackId::new).collect(),
        }
    }
}

/// Request body for playlist creation.
#[derive(Debug, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

// =============================================================================
// Comment Types
// =============================================================================

/// A track comment as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiComment {
    pub id: String,
    pub track_id: String,
    pub user_id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<ApiComment> for Comment {
    fn from(comment: ApiComment) -> Self {
        Self {
            id: CommentId::new(comment.id),
            track_id: TrackId::new(comment.track_id),
            user_id: UserId::new(comment.user_id),
            author: comment.author,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Request body for posting a comment.
#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    pub content: String,
}

// =============================================================================
// Assistant Types
// =============================================================================

/// Listening-history entry sent to the recommendation assistant.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub title: String,
    pub artist: String,
}

impl From<&Track> for HistoryEntry {
    fn from(track: &Track) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
        }
    }
}

/// Request body for a recommendation.
#[derive(Debug, Serialize)]
pub struct RecommendRequest {
    pub history: Vec<HistoryEntry>,
    pub query: String,
}

/// Recommendation text from the assistant.
#[derive(Debug, Deserialize)]
pub struct RecommendResponse {
    pub text: String,
}

/// Request body for a price suggestion.
#[derive(Debug, Serialize)]
pub struct SuggestPriceRequest {
    pub title: String,
    pub genre: String,
    pub artist: String,
}

/// Suggested price from the assistant.
#[derive(Debug, Deserialize)]
pub struct SuggestPriceResponse {
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> UploadTrackRequest {
        UploadTrackRequest {
            title: "Umoya".to_string(),
            artist: "Sipho M".to_string(),
            album: "Night Sessions".to_string(),
            price: 150.0,
            genre: "Amapiano".to_string(),
            duration: "3:45".to_string(),
            cover_url: None,
            audio_url: "https://cdn.example.com/audio/umoya.mp3".to_string(),
        }
    }

    #[test]
    fn valid_upload_passes() {
        assert!(upload().validate().is_ok());
    }

    #[test]
    fn upload_rejects_blank_title() {
        let mut form = upload();
        form.title = "   ".to_string();
        assert!(matches!(
            form.validate(),
            Err(ServerClientError::InvalidRequest(_))
        ));
    }

    #[test]
    fn upload_rejects_negative_price() {
        let mut form = upload();
        form.price = -1.0;
        assert!(form.validate().is_err());

        form.price = f64::NAN;
        assert!(form.validate().is_err());
    }

    #[test]
    fn update_accepts_partial_fields() {
        let edit = UpdateTrackRequest {
            price: Some(200.0),
            ..Default::default()
        };
        assert!(edit.validate().is_ok());

        let json = serde_json::to_string(&edit).unwrap();
        assert_eq!(json, r#"{"price":200.0}"#);
    }

    #[test]
    fn api_track_converts_to_domain() {
        let api = ApiTrack {
            id: "t1".to_string(),
            title: "Umoya".to_string(),
            artist: "Sipho M".to_string(),
            artist_id: Some("u1".to_string()),
            album: "Night Sessions".to_string(),
            price: 150.0,
            cover_url: None,
            duration: "3:45".to_string(),
            genre: "Amapiano".to_string(),
            audio_url: "https://cdn.example.com/audio/t1.mp3".to_string(),
        };

        let track: Track = api.into();
        assert_eq!(track.id, TrackId::new("t1"));
        assert_eq!(track.artist_id, Some(UserId::new("u1")));
        assert_eq!(track.price, 150.0);
    }
}
