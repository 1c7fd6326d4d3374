//! Like/unlike operations.

use crate::error::Result;
use crate::http;
use melody_core::types::TrackId;
use reqwest::Client;
use std::collections::HashSet;
use tracing::debug;

/// Likes client for the user's liked-track set.
pub struct LikesClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl LikesClient {
    pub(crate) fn new(http: Client, base_url: String, access_token: String) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Fetch the set of liked track IDs.
    pub async fn list(&self) -> Result<HashSet<TrackId>> {
        let url = format!("{}/api/likes", self.base_url);
        debug!(url = %url, "Fetching likes");

        let response = http::send(self.http.get(&url).bearer_auth(&self.access_token)).await?;
        let ids: Vec<String> = http::json(response, "likes listing").await?;
        Ok(ids.into_iter().map(TrackId::new).collect())
    }

    /// Like a track.
    pub async fn like(&self, track_id: &TrackId) -> Result<()> {
        let url = format!("{}/api/likes/{}", self.base_url, track_id);
        debug!(url = %url, "Liking track");

        let response = http::send(self.http.post(&url).bearer_auth(&self.access_token)).await?;
        http::ok(response).await
    }

    /// Remove a like.
    pub async fn unlike(&self, track_id: &TrackId) -> Result<()> {
        let url = format!("{}/api/likes/{}", self.base_url, track_id);
        debug!(url = %url, "Unliking track");

        let response = http::send(self.http.delete(&url).bearer_auth(&self.access_token)).await?;
        http::ok(response).await
    }
}
