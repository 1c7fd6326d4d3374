//! Playlist operations.

use crate::error::Result;
use crate::http;
use crate::types::{ApiPlaylist, CreatePlaylistRequest};
use melody_core::types::{Playlist, PlaylistId, TrackId};
use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// Playlists client for the user's playlists.
pub struct PlaylistsClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl PlaylistsClient {
    pub(crate) fn new(http: Client, base_url: String, access_token: String) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Fetch the user's playlists with their track membership.
    pub async fn list(&self) -> Result<Vec<Playlist>> {
        let url = format!("{}/api/playlists", self.base_url);
        debug!(url = %url, "Fetching playlists");

        let response = http::send(self.http.get(&url).bearer_auth(&self.access_token)).await?;
        let playlists: Vec<ApiPlaylist> = http::json(response, "playlist listing").await?;
        Ok(playlists.into_iter().map(Playlist::from).collect())
    }

    /// Create an empty playlist.
    pub async fn create(&self, name: &str) -> Result<Playlist> {
        let url = format!("{}/api/playlists", self.base_url);
        debug!(url = %url, name = %name, "Creating playlist");

        let request = CreatePlaylistRequest {
            name: name.to_string(),
        };
        let response = http::send(
            self.http
                .post(&url)
                .bearer_auth(&self.access_token)
                .json(&request),
        )
        .await?;
        let playlist: ApiPlaylist = http::json(response, "created playlist").await?;
        Ok(playlist.into())
    }

    /// Add a track to a playlist.
    pub async fn add_track(&self, playlist_id: &PlaylistId, track_id: &TrackId) -> Result<()> {
        let url = format!("{}/api/playlists/{}/tracks", self.base_url, playlist_id);
        debug!(url = %url, "Adding track to playlist");

        let response = http::send(
            self.http
                .post(&url)
                .bearer_auth(&self.access_token)
                .json(&json!({ "track_id": track_id })),
        )
        .await?;
        http::ok(response).await
    }

    /// Remove a track from a playlist.
    pub async fn remove_track(&self, playlist_id: &PlaylistId, track_id: &TrackId) -> Result<()> {
        let url = format!(
            "{}/api/playlists/{}/tracks/{}",
            self.base_url, playlist_id, track_id
        );
        debug!(url = %url, "Removing track from playlist");

        let response = http::send(self.http.delete(&url).bearer_auth(&self.access_token)).await?;
        http::ok(response).await
    }
}
