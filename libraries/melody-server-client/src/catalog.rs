//! Catalog operations: public track listings and artist CRUD.

use crate::error::{Result, ServerClientError};
use crate::http;
use crate::types::{ApiTrack, UpdateTrackRequest, UploadTrackRequest};
use melody_core::types::{Track, TrackId};
use reqwest::Client;
use tracing::debug;

/// Catalog client.
///
/// Listing and lookup are public; create/update/delete are artist
/// workflows and require the client to carry a token.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl CatalogClient {
    pub(crate) fn new(http: Client, base_url: String, access_token: Option<String>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Fetch the full catalog, newest first.
    pub async fn list_tracks(&self) -> Result<Vec<Track>> {
        let url = format!("{}/api/tracks", self.base_url);
        debug!(url = %url, "Fetching catalog");

        let response = http::send(self.http.get(&url)).await?;
        let tracks: Vec<ApiTrack> = http::json(response, "catalog listing").await?;

        debug!(count = tracks.len(), "Fetched catalog");
        Ok(tracks.into_iter().map(Track::from).collect())
    }

    /// Fetch a single track by ID.
    pub async fn get_track(&self, track_id: &TrackId) -> Result<Track> {
        let url = format!("{}/api/tracks/{}", self.base_url, track_id);
        debug!(url = %url, "Fetching track");

        let response = http::send(self.http.get(&url)).await?;
        let track: ApiTrack = http::json(response, "track").await?;
        Ok(track.into())
    }

    /// Publish a new track (artist upload workflow).
    pub async fn create_track(&self, request: &UploadTrackRequest) -> Result<Track> {
        request.validate()?;

        let url = format!("{}/api/tracks", self.base_url);
        let token = self.token()?;
        debug!(url = %url, title = %request.title, "Uploading track");

        let response =
            http::send(self.http.post(&url).bearer_auth(token).json(request)).await?;
        let track: ApiTrack = http::json(response, "created track").await?;
        Ok(track.into())
    }

    /// Edit an existing track (artist edit workflow).
    pub async fn update_track(
        &self,
        track_id: &TrackId,
        request: &UpdateTrackRequest,
    ) -> Result<Track> {
        request.validate()?;

        let url = format!("{}/api/tracks/{}", self.base_url, track_id);
        let token = self.token()?;
        debug!(url = %url, "Updating track");

        let response =
            http::send(self.http.patch(&url).bearer_auth(token).json(request)).await?;
        let track: ApiTrack = http::json(response, "updated track").await?;
        Ok(track.into())
    }

    /// Delete a track (artist-initiated).
    pub async fn delete_track(&self, track_id: &TrackId) -> Result<()> {
        let url = format!("{}/api/tracks/{}", self.base_url, track_id);
        let token = self.token()?;
        debug!(url = %url, "Deleting track");

        let response = http::send(self.http.delete(&url).bearer_auth(token)).await?;
        http::ok(response).await
    }

    fn token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or(ServerClientError::AuthRequired)
    }
}
